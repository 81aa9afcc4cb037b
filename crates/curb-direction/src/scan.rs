//! Topology scanner: classify each edge incident to a node.
//!
//! The scanner makes no restriction decision.  It evaluates the access
//! predicate twice per incident edge (once for arriving at the node, once
//! for leaving it) and records the result as an [`EdgeRole`], together
//! with the neighbour (for duplicate detection) and the edge's first shape
//! point away from the node (for side classification).

use log::trace;

use curb_core::{CurbError, CurbResult, EdgeAccess, EdgeId, GeoPoint, NodeId, RoadGraph};

// ── EdgeRole ──────────────────────────────────────────────────────────────────

/// Usability of one physical edge at one specific node.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum EdgeRole {
    /// Can only be used to arrive at the node.
    InOnly,
    /// Can only be used to leave the node.
    OutOnly,
    Both,
    /// Blocked in both directions.
    None,
}

impl EdgeRole {
    pub fn from_access(inbound: bool, outbound: bool) -> Self {
        match (inbound, outbound) {
            (true, true) => EdgeRole::Both,
            (true, false) => EdgeRole::InOnly,
            (false, true) => EdgeRole::OutOnly,
            (false, false) => EdgeRole::None,
        }
    }

    #[inline]
    pub fn is_inbound(self) -> bool {
        matches!(self, EdgeRole::InOnly | EdgeRole::Both)
    }

    #[inline]
    pub fn is_outbound(self) -> bool {
        matches!(self, EdgeRole::OutOnly | EdgeRole::Both)
    }
}

// ── ScannedEdge / Topology ────────────────────────────────────────────────────

/// One incident edge after access evaluation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScannedEdge {
    pub edge: EdgeId,
    pub adj: NodeId,
    pub role: EdgeRole,
    /// First shape point moving away from the node.
    pub anchor: GeoPoint,
}

/// The classified neighbourhood of a single node.
#[derive(Clone, Debug, PartialEq)]
pub struct Topology {
    pub node: NodeId,
    pub position: GeoPoint,
    /// One entry per incident edge instance, duplicates included, in the
    /// order the graph listed them.
    pub edges: Vec<ScannedEdge>,
}

impl Topology {
    /// Number of incident edge instances, duplicates and both ends of a
    /// self-loop included.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of edges usable to arrive at the node.
    pub fn inbound_count(&self) -> usize {
        self.edges.iter().filter(|e| e.role.is_inbound()).count()
    }

    /// Number of edges usable to leave the node.
    pub fn outbound_count(&self) -> usize {
        self.edges.iter().filter(|e| e.role.is_outbound()).count()
    }

    /// `true` if there are at least two edges and all of them lead to the
    /// same neighbour.
    pub fn single_neighbor(&self) -> bool {
        match self.edges.split_first() {
            Some((first, rest)) if !rest.is_empty() => rest.iter().all(|e| e.adj == first.adj),
            _ => false,
        }
    }
}

// ── scan ──────────────────────────────────────────────────────────────────────

/// Scan the neighbourhood of `node`.
///
/// # Errors
///
/// [`CurbError::NodeNotFound`] if `graph` does not know `node`.
pub fn scan<G, A>(graph: &G, access: &A, node: NodeId) -> CurbResult<Topology>
where
    G: RoadGraph + ?Sized,
    A: EdgeAccess + ?Sized,
{
    let position = graph.node_position(node).ok_or(CurbError::NodeNotFound(node))?;

    let edges = graph
        .incident_edges(node)
        .map(|inc| {
            let inbound = access.accessible(inc.edge, inc.inbound_reverse());
            let outbound = access.accessible(inc.edge, inc.outbound_reverse());
            let role = EdgeRole::from_access(inbound, outbound);
            trace!("{node}: {} → {} is {role:?}", inc.edge, inc.adj);
            ScannedEdge { edge: inc.edge, adj: inc.adj, role, anchor: inc.anchor }
        })
        .collect();

    Ok(Topology { node, position, edges })
}
