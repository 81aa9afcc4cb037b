//! Road network representation and builder.
//!
//! # Data layout
//!
//! Edges are stored **once**, undirected, in insertion order: `EdgeId(i)` is
//! the `i`-th edge added to the builder.  Travel direction is gated per edge
//! by [`AccessFlags`] relative to the stored orientation `base → adj`.
//!
//! Node incidence uses **Compressed Sparse Row (CSR)** format.  Given a
//! `NodeId n`, the edges touching it occupy the slice:
//!
//! ```text
//! adj_edges[ node_adj_start[n] .. node_adj_start[n+1] ]
//! ```
//!
//! Every edge appears in the incidence lists of both endpoints, so
//! duplicate roads between the same two nodes stay distinct entries.
//! `adj_reversed` runs parallel to `adj_edges` and records whether the node
//! owning the slot is the edge's stored end.
//!
//! Shape points between the two endpoints ("pillars") use the same CSR
//! trick: pillars of edge `e` are `pillars[ pillar_start[e] .. pillar_start[e+1] ]`,
//! ordered from `base` toward `adj`.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(lat, lon)` to the nearest `NodeId`.  Used
//! to snap a query location to the node whose directions get resolved.

use rstar::{PointDistance, RTree, RTreeObject, AABB};

use curb_core::{EdgeAccess, EdgeId, GeoPoint, IncidentEdge, NodeId, RoadGraph};

use crate::{NetworkError, NetworkResult};

// ── AccessFlags ───────────────────────────────────────────────────────────────

/// Which travel directions an edge allows, relative to its stored
/// orientation `base → adj`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessFlags {
    /// `base → adj` may be travelled.
    pub forward: bool,
    /// `adj → base` may be travelled.
    pub backward: bool,
}

impl AccessFlags {
    pub const BOTH:     AccessFlags = AccessFlags { forward: true,  backward: true  };
    pub const FORWARD:  AccessFlags = AccessFlags { forward: true,  backward: false };
    pub const BACKWARD: AccessFlags = AccessFlags { forward: false, backward: true  };
    pub const NONE:     AccessFlags = AccessFlags { forward: false, backward: false };

    /// Answer an [`EdgeAccess`] query against these flags.
    #[inline]
    pub fn allows(self, reverse: bool) -> bool {
        if reverse { self.backward } else { self.forward }
    }
}

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[lat, lon]` point with
/// the associated `NodeId`.
#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2], // [lat, lon]
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared Euclidean distance in lat/lon space.  Sufficient for
    /// nearest-node queries within a city (error < 0.1 % at ≤ 60° lat).
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Undirected road graph in CSR format plus a spatial index for node snapping.
///
/// All fields except the R-tree are `pub` for direct indexed access on hot
/// paths.  Do not construct directly; use [`RoadNetworkBuilder`].
pub struct RoadNetwork {
    // ── Node data ─────────────────────────────────────────────────────────
    /// Geographic position of each node.  Indexed by `NodeId`.
    pub node_pos: Vec<GeoPoint>,

    // ── CSR incidence ─────────────────────────────────────────────────────
    /// CSR row pointer.  Slots of node `n` are
    /// `node_adj_start[n] .. node_adj_start[n+1]`.  Length = `node_count + 1`.
    pub node_adj_start: Vec<u32>,

    /// Edge occupying each incidence slot.
    pub adj_edges: Vec<EdgeId>,

    /// `true` if the slot's node is the stored end (`adj`) of the edge.
    pub adj_reversed: Vec<bool>,

    // ── Edge data (indexed by EdgeId) ─────────────────────────────────────
    /// Stored start node of each edge.
    pub edge_base: Vec<NodeId>,

    /// Stored end node of each edge.
    pub edge_adj: Vec<NodeId>,

    /// Direction gating of each edge.
    pub edge_access: Vec<AccessFlags>,

    // ── Edge geometry ─────────────────────────────────────────────────────
    /// CSR row pointer into `pillars`.  Length = `edge_count + 1`.
    pub pillar_start: Vec<u32>,

    /// Shape points of all edges, each edge's run ordered `base → adj`.
    pub pillars: Vec<GeoPoint>,

    // ── Spatial index ─────────────────────────────────────────────────────
    spatial_idx: RTree<NodeEntry>,
}

impl RoadNetwork {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_base.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Incidence slot range of `node`; empty for unknown nodes.
    #[inline]
    fn slots(&self, node: NodeId) -> std::ops::Range<usize> {
        match (
            self.node_adj_start.get(node.index()),
            self.node_adj_start.get(node.index() + 1),
        ) {
            (Some(&start), Some(&end)) => start as usize..end as usize,
            _ => 0..0,
        }
    }

    /// Iterator over the `EdgeId`s of all edges touching `node`, in
    /// ascending `EdgeId` order.  A self-loop is listed twice.
    #[inline]
    pub fn incident(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.adj_edges[self.slots(node)].iter().copied()
    }

    /// Number of incidence slots of `node` (duplicates and loops included).
    #[inline]
    pub fn degree(&self, node: NodeId) -> usize {
        self.slots(node).len()
    }

    /// Stored `(base, adj)` endpoints of `edge`.
    #[inline]
    pub fn endpoints(&self, edge: EdgeId) -> (NodeId, NodeId) {
        (self.edge_base[edge.index()], self.edge_adj[edge.index()])
    }

    /// Pillar points of `edge`, ordered `base → adj`.
    #[inline]
    pub fn edge_pillars(&self, edge: EdgeId) -> &[GeoPoint] {
        let start = self.pillar_start[edge.index()] as usize;
        let end   = self.pillar_start[edge.index() + 1] as usize;
        &self.pillars[start..end]
    }

    /// First shape point of `edge` moving away from whichever endpoint the
    /// traversal starts at.
    fn anchor(&self, edge: EdgeId, reversed: bool) -> GeoPoint {
        let pillars = self.edge_pillars(edge);
        let (base, adj) = self.endpoints(edge);
        if reversed {
            pillars.last().copied().unwrap_or(self.node_pos[base.index()])
        } else {
            pillars.first().copied().unwrap_or(self.node_pos[adj.index()])
        }
    }

    /// First edge joining `from` and `to` that may be travelled `from → to`.
    pub fn find_edge(&self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        self.incident_edges(from)
            .find(|e| e.adj == to && self.accessible(e.edge, e.outbound_reverse()))
            .map(|e| e.edge)
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Return the `NodeId` of the nearest road node to `pos`.
    ///
    /// Returns `None` only if the network has no nodes.
    pub fn snap_to_node(&self, pos: GeoPoint) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.lat, pos.lon])
            .map(|e| e.id)
    }

    /// Return up to `k` nearest nodes to `pos`, sorted by ascending distance.
    pub fn k_nearest_nodes(&self, pos: GeoPoint, k: usize) -> Vec<NodeId> {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.lat, pos.lon])
            .take(k)
            .map(|e| e.id)
            .collect()
    }
}

// ── Collaborator impls ────────────────────────────────────────────────────────

impl RoadGraph for RoadNetwork {
    fn node_position(&self, node: NodeId) -> Option<GeoPoint> {
        self.node_pos.get(node.index()).copied()
    }

    fn incident_edges(&self, node: NodeId) -> impl Iterator<Item = IncidentEdge> + '_ {
        self.slots(node).map(move |slot| {
            let edge = self.adj_edges[slot];
            let reversed = self.adj_reversed[slot];
            let (base, adj) = self.endpoints(edge);
            IncidentEdge {
                edge,
                adj: if reversed { base } else { adj },
                reversed,
                anchor: self.anchor(edge, reversed),
            }
        })
    }
}

/// The network's own stored access flags.
impl EdgeAccess for RoadNetwork {
    #[inline]
    fn accessible(&self, edge: EdgeId, reverse: bool) -> bool {
        self.edge_access
            .get(edge.index())
            .is_some_and(|flags| flags.allows(reverse))
    }
}

// ── RoadNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RoadNetwork`] incrementally, then call [`build`](Self::build).
///
/// Nodes must be added before the edges that reference them.  `build()`
/// constructs the CSR incidence and pillar arrays and bulk-loads the R-tree.
///
/// # Example
///
/// ```
/// use curb_core::GeoPoint;
/// use curb_network::{AccessFlags, RoadNetworkBuilder};
///
/// let mut b = RoadNetworkBuilder::new();
/// let a = b.add_node(GeoPoint::new(48.137, 11.575));
/// let c = b.add_node(GeoPoint::new(48.138, 11.576));
/// let road = b.add_road(a, c).unwrap();
/// let lane = b.add_edge(c, a, AccessFlags::FORWARD).unwrap();
/// let net = b.build();
/// assert_eq!(net.node_count(), 2);
/// assert_eq!(net.edge_count(), 2); // stored once each, undirected
/// assert_ne!(road, lane);
/// ```
pub struct RoadNetworkBuilder {
    nodes:     Vec<GeoPoint>,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    base:     NodeId,
    adj:      NodeId,
    pillars:  Vec<GeoPoint>,
    access:   AccessFlags,
}

impl RoadNetworkBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), raw_edges: Vec::new() }
    }

    /// Pre-allocate for the expected number of nodes and edges to reduce
    /// reallocations when bulk-loading from OSM.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes:     Vec::with_capacity(nodes),
            raw_edges: Vec::with_capacity(edges),
        }
    }

    /// Add a road node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: GeoPoint) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        id
    }

    /// Add a straight edge stored as `base → adj` with the given access.
    pub fn add_edge(
        &mut self,
        base: NodeId,
        adj: NodeId,
        access: AccessFlags,
    ) -> NetworkResult<EdgeId> {
        self.add_edge_with_geometry(base, adj, Vec::new(), access)
    }

    /// Add an edge whose shape passes through `pillars` (ordered from `base`
    /// toward `adj`, endpoints excluded).
    pub fn add_edge_with_geometry(
        &mut self,
        base: NodeId,
        adj: NodeId,
        pillars: Vec<GeoPoint>,
        access: AccessFlags,
    ) -> NetworkResult<EdgeId> {
        for node in [base, adj] {
            if self.node_pos(node).is_none() {
                return Err(NetworkError::NodeNotFound(node));
            }
        }

        let id = EdgeId(self.raw_edges.len() as u32);
        self.raw_edges.push(RawEdge { base, adj, pillars, access });
        Ok(id)
    }

    /// Convenience: a straight road open in **both directions**.
    pub fn add_road(&mut self, a: NodeId, b: NodeId) -> NetworkResult<EdgeId> {
        self.add_edge(a, b, AccessFlags::BOTH)
    }

    /// Convenience: a straight one-way road open only `from → to`.
    pub fn add_one_way(&mut self, from: NodeId, to: NodeId) -> NetworkResult<EdgeId> {
        self.add_edge(from, to, AccessFlags::FORWARD)
    }

    /// Look up the position of a node added earlier.
    pub fn node_pos(&self, id: NodeId) -> Option<GeoPoint> {
        self.nodes.get(id.index()).copied()
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder and produce a [`RoadNetwork`].
    ///
    /// Time complexity: O(N + E) for the CSR arrays + O(N log N) for the
    /// R-tree bulk load, where N = nodes, E = edges.
    pub fn build(self) -> RoadNetwork {
        let node_count = self.nodes.len();
        let raw = self.raw_edges;

        // Count incidence slots per node; a self-loop takes two.
        let mut node_adj_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_adj_start[e.base.index() + 1] += 1;
            node_adj_start[e.adj.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_adj_start[i] += node_adj_start[i - 1];
        }
        let slot_count = node_adj_start[node_count] as usize;
        debug_assert_eq!(slot_count, raw.len() * 2);

        // Fill slots in EdgeId order so each node's list stays sorted.
        let mut cursor: Vec<u32> = node_adj_start[..node_count].to_vec();
        let mut adj_edges    = vec![EdgeId::INVALID; slot_count];
        let mut adj_reversed = vec![false; slot_count];
        for (i, e) in raw.iter().enumerate() {
            let id = EdgeId(i as u32);
            for (node, reversed) in [(e.base, false), (e.adj, true)] {
                let slot = cursor[node.index()] as usize;
                adj_edges[slot] = id;
                adj_reversed[slot] = reversed;
                cursor[node.index()] += 1;
            }
        }

        let edge_base:   Vec<NodeId>      = raw.iter().map(|e| e.base).collect();
        let edge_adj:    Vec<NodeId>      = raw.iter().map(|e| e.adj).collect();
        let edge_access: Vec<AccessFlags> = raw.iter().map(|e| e.access).collect();

        let mut pillar_start = Vec::with_capacity(raw.len() + 1);
        let mut pillars = Vec::new();
        pillar_start.push(0u32);
        for e in raw {
            pillars.extend(e.pillars);
            pillar_start.push(pillars.len() as u32);
        }

        // Bulk-load R-tree for O(N log N) construction (faster than N inserts).
        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, &pos)| NodeEntry {
                point: [pos.lat, pos.lon],
                id: NodeId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        RoadNetwork {
            node_pos: self.nodes,
            node_adj_start,
            adj_edges,
            adj_reversed,
            edge_base,
            edge_adj,
            edge_access,
            pillar_start,
            pillars,
            spatial_idx,
        }
    }
}

impl Default for RoadNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
