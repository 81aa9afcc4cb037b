//! Direction resolver: the public entry point.
//!
//! # Decision procedure
//!
//! Evaluated in order, first match wins, over the scanned incident edges:
//!
//! | # | Condition                                    | Result                                 |
//! |---|----------------------------------------------|----------------------------------------|
//! | 1 | no inbound-usable or no outbound-usable edge | `Impossible`                           |
//! | 2 | three or more edge instances                 | `Unrestricted` (junction)              |
//! | 3 | two edges, same neighbour                    | `Unrestricted` (duplicate roads)       |
//! | 4 | two edges, distinct neighbours               | `Restricted` or `OnlyRight`/`OnlyLeft` |
//! | 5 | one edge                                     | `Restricted(e, e, e, e)` (dead end)    |
//!
//! In case 4 the side label is computed against the outward heading of the
//! edge that fills the `in` slot of the pairing being labelled, so the label
//! always describes the side as seen by traffic arriving on that edge.
//!
//! # Thread safety
//!
//! A resolver holds only shared references and a small config, so it is
//! `Send + Sync` whenever its collaborators are.  Calls never mutate state.

use log::{debug, trace};

use curb_core::{CurbResult, EdgeAccess, GeoPoint, NodeId, RoadGraph};

use crate::scan::{EdgeRole, ScannedEdge, Topology, scan};
use crate::side::{Heading, Side, side_of};
use crate::{ResolvedDirections, ResolverConfig};

/// Resolves legal arrive/depart pairings at a node for a nearby query point.
pub struct DirectionResolver<'g, G: ?Sized, A: ?Sized> {
    graph:  &'g G,
    access: &'g A,
    config: ResolverConfig,
}

impl<'g, G, A> DirectionResolver<'g, G, A>
where
    G: RoadGraph + ?Sized,
    A: EdgeAccess + ?Sized,
{
    /// Resolver with the default [`ResolverConfig`].
    pub fn new(graph: &'g G, access: &'g A) -> Self {
        Self { graph, access, config: ResolverConfig::default() }
    }

    /// Resolver with an explicit config, validated up front.
    pub fn with_config(graph: &'g G, access: &'g A, config: ResolverConfig) -> CurbResult<Self> {
        config.validate()?;
        Ok(Self { graph, access, config })
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve the legal directions at `node` for a location at `query`.
    ///
    /// # Errors
    ///
    /// - [`CurbError::NodeNotFound`](curb_core::CurbError::NodeNotFound) if
    ///   the graph does not know `node`.
    /// - [`CurbError::InvalidCoordinate`](curb_core::CurbError::InvalidCoordinate)
    ///   if `query` is not a finite WGS-84 coordinate.
    ///
    /// `Impossible` and `Unrestricted` are ordinary results, not errors.
    pub fn resolve_directions(&self, node: NodeId, query: GeoPoint) -> CurbResult<ResolvedDirections> {
        let query = query.validated()?;
        let topology = scan(self.graph, self.access, node)?;
        let resolved = self.classify(&topology, query);
        debug!("{node} @ {query}: {resolved}");
        Ok(resolved)
    }

    fn classify(&self, topology: &Topology, query: GeoPoint) -> ResolvedDirections {
        if topology.inbound_count() == 0 || topology.outbound_count() == 0 {
            return ResolvedDirections::Impossible;
        }

        // Three or more edge instances: a junction.
        if topology.len() >= 3 {
            return ResolvedDirections::Unrestricted;
        }

        match topology.edges.as_slice() {
            [only] => {
                debug_assert_eq!(only.role, EdgeRole::Both);
                dead_end(only)
            }
            [_, _] if topology.single_neighbor() => ResolvedDirections::Unrestricted,
            [a, b] => self.through_road(topology.position, a, b, query),
            // Zero edges has no inbound edge and returned above.
            _ => {
                debug_assert!(topology.is_empty());
                ResolvedDirections::Impossible
            }
        }
    }

    /// Two edges to two distinct neighbours.
    fn through_road(
        &self,
        position: GeoPoint,
        a: &ScannedEdge,
        b: &ScannedEdge,
        query: GeoPoint,
    ) -> ResolvedDirections {
        // One edge fully blocked: the other is necessarily `Both` and the
        // node behaves like the end of a dead-end street.
        match (a.role, b.role) {
            (EdgeRole::None, _) => return dead_end(b),
            (_, EdgeRole::None) => return dead_end(a),
            _ => {}
        }

        if a.role == EdgeRole::Both && b.role == EdgeRole::Both {
            let side = self.side(position, a, query);
            return ResolvedDirections::paired(side, (a.edge, b.edge), (b.edge, a.edge));
        }

        // Exactly one pairing: a one-way edge fixes its own slot and the
        // other edge takes the remaining one.
        let (inbound, outbound) = match (a.role, b.role) {
            (EdgeRole::InOnly, _) | (_, EdgeRole::OutOnly) => (a, b),
            _ => (b, a),
        };
        debug_assert!(inbound.role.is_inbound() && outbound.role.is_outbound());

        let side = self.side(position, inbound, query);
        ResolvedDirections::only(side, inbound.edge, outbound.edge)
    }

    /// Side of `query` as seen by traffic arriving on `reference`.
    fn side(&self, position: GeoPoint, reference: &ScannedEdge, query: GeoPoint) -> Side {
        let heading = Heading::between(position, reference.anchor);
        let side = side_of(position, heading, query, &self.config);
        trace!("heading {heading:?} from {} puts {query} on the {side}", reference.edge);
        side
    }
}

fn dead_end(edge: &ScannedEdge) -> ResolvedDirections {
    ResolvedDirections::restricted(edge.edge, edge.edge, edge.edge, edge.edge)
}

// ── Batch resolution ──────────────────────────────────────────────────────────

#[cfg(not(feature = "parallel"))]
impl<'g, G, A> DirectionResolver<'g, G, A>
where
    G: RoadGraph + ?Sized,
    A: EdgeAccess + ?Sized,
{
    /// Resolve many `(node, query)` pairs.  Output order matches input order.
    pub fn resolve_all(&self, queries: &[(NodeId, GeoPoint)]) -> Vec<CurbResult<ResolvedDirections>> {
        queries
            .iter()
            .map(|&(node, query)| self.resolve_directions(node, query))
            .collect()
    }
}

#[cfg(feature = "parallel")]
impl<'g, G, A> DirectionResolver<'g, G, A>
where
    G: RoadGraph + Sync + ?Sized,
    A: EdgeAccess + Sync + ?Sized,
{
    /// Resolve many `(node, query)` pairs on Rayon's thread pool.  Output
    /// order matches input order.
    pub fn resolve_all(&self, queries: &[(NodeId, GeoPoint)]) -> Vec<CurbResult<ResolvedDirections>> {
        use rayon::prelude::*;

        queries
            .par_iter()
            .map(|&(node, query)| self.resolve_directions(node, query))
            .collect()
    }
}
