//! Collaborator traits consumed by the direction resolver.
//!
//! The resolver never touches concrete storage.  Anything that can list a
//! node's incident edges ([`RoadGraph`]) and answer per-direction access
//! questions ([`EdgeAccess`]) can be resolved against: the in-memory
//! `curb_network::RoadNetwork`, a memory-mapped production graph, or a
//! synthetic topology in a unit test.

use crate::{EdgeId, GeoPoint, NodeId};

// ── IncidentEdge ──────────────────────────────────────────────────────────────

/// One physical edge as seen from the node being examined.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IncidentEdge {
    pub edge: EdgeId,

    /// The node at the far end of the edge.
    pub adj: NodeId,

    /// `true` when the examined node is the edge's *stored end*.  Travelling
    /// from the node toward `adj` is then the edge's reverse direction.
    pub reversed: bool,

    /// First shape point moving away from the examined node: the first
    /// pillar of the edge geometry, or `adj`'s position for a straight edge.
    pub anchor: GeoPoint,
}

impl IncidentEdge {
    /// The `reverse` argument to [`EdgeAccess::accessible`] that asks
    /// "may traffic leave the node along this edge?".
    #[inline]
    pub fn outbound_reverse(&self) -> bool {
        self.reversed
    }

    /// The `reverse` argument that asks "may traffic arrive at the node
    /// along this edge?".
    #[inline]
    pub fn inbound_reverse(&self) -> bool {
        !self.reversed
    }
}

// ── RoadGraph ─────────────────────────────────────────────────────────────────

/// Read-only view of node coordinates and node/edge incidence.
///
/// # Contract
///
/// - `incident_edges` yields one entry per physical edge touching `node`.
///   Duplicate edges to the same neighbour are separate entries; they must
///   not be collapsed.
/// - Implementations shared across threads must be safe for concurrent
///   reads; the resolver only ever reads.
pub trait RoadGraph {
    /// Position of `node`, or `None` if the node does not exist.
    fn node_position(&self, node: NodeId) -> Option<GeoPoint>;

    /// All edges incident to `node`.  Only called for nodes that
    /// [`node_position`](Self::node_position) resolved.
    fn incident_edges(&self, node: NodeId) -> impl Iterator<Item = IncidentEdge> + '_;
}

// ── EdgeAccess ────────────────────────────────────────────────────────────────

/// Per-direction access predicate over physical edges.
///
/// `reverse = false` asks whether the edge may be travelled from its stored
/// start toward its stored end; `reverse = true` asks about the opposite
/// direction.  Translating this into "inbound"/"outbound" at a particular
/// node is the caller's job (see [`IncidentEdge::inbound_reverse`]).
pub trait EdgeAccess {
    fn accessible(&self, edge: EdgeId, reverse: bool) -> bool;
}

impl<F> EdgeAccess for F
where
    F: Fn(EdgeId, bool) -> bool,
{
    #[inline]
    fn accessible(&self, edge: EdgeId, reverse: bool) -> bool {
        self(edge, reverse)
    }
}
