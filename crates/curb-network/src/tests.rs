//! Unit tests for curb-network.
//!
//! All tests use a hand-crafted network so they run without any OSM file.

#[cfg(test)]
mod helpers {
    use curb_core::{EdgeId, GeoPoint, NodeId};
    use crate::{AccessFlags, RoadNetwork, RoadNetworkBuilder};

    /// Build a small network for testing.
    ///
    /// Nodes (lat, lon):
    ///   0:(0,0)  1:(0,1)  2:(0,2)
    ///   3:(1,0)
    ///
    /// Edges (in EdgeId order):
    ///   e0: 0-1 both, e1: 1→2 one-way, e2: 0-3 both, e3: 0-3 both (duplicate)
    pub fn small_network() -> (RoadNetwork, [NodeId; 4], [EdgeId; 4]) {
        let mut b = RoadNetworkBuilder::new();

        let n0 = b.add_node(GeoPoint::new(0.0, 0.0));
        let n1 = b.add_node(GeoPoint::new(0.0, 1.0));
        let n2 = b.add_node(GeoPoint::new(0.0, 2.0));
        let n3 = b.add_node(GeoPoint::new(1.0, 0.0));

        let e0 = b.add_road(n0, n1).unwrap();
        let e1 = b.add_one_way(n1, n2).unwrap();
        let e2 = b.add_edge(n0, n3, AccessFlags::BOTH).unwrap();
        let e3 = b.add_edge(n3, n0, AccessFlags::BOTH).unwrap();

        (b.build(), [n0, n1, n2, n3], [e0, e1, e2, e3])
    }
}

// ── Builder & network structure ────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use curb_core::{EdgeId, GeoPoint, NodeId};
    use crate::{AccessFlags, NetworkError, RoadNetworkBuilder};

    #[test]
    fn empty_build() {
        let net = RoadNetworkBuilder::new().build();
        assert_eq!(net.node_count(), 0);
        assert_eq!(net.edge_count(), 0);
        assert!(net.is_empty());
    }

    #[test]
    fn edge_ids_follow_insertion_order() {
        let (_, _, edges) = super::helpers::small_network();
        assert_eq!(edges, [EdgeId(0), EdgeId(1), EdgeId(2), EdgeId(3)]);
    }

    #[test]
    fn unknown_endpoint_is_rejected() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(GeoPoint::new(0.0, 0.0));
        let err = b.add_edge(a, NodeId(9), AccessFlags::BOTH).unwrap_err();
        assert!(matches!(err, NetworkError::NodeNotFound(NodeId(9))));
        assert_eq!(b.edge_count(), 0);
    }

    #[test]
    fn edges_are_stored_once() {
        let (net, [n0, n1, n2, n3], _) = super::helpers::small_network();
        assert_eq!(net.edge_count(), 4);
        assert_eq!(net.degree(n0), 3); // e0, e2, e3
        assert_eq!(net.degree(n1), 2);
        assert_eq!(net.degree(n2), 1); // one-way still incident
        assert_eq!(net.degree(n3), 2); // duplicates kept
    }

    #[test]
    fn incident_is_sorted_by_edge_id() {
        let (net, [n0, ..], [e0, _, e2, e3]) = super::helpers::small_network();
        let ids: Vec<_> = net.incident(n0).collect();
        assert_eq!(ids, vec![e0, e2, e3]);
    }

    #[test]
    fn self_loop_takes_two_slots() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(GeoPoint::new(0.0, 0.0));
        let loop_edge = b
            .add_edge_with_geometry(
                a,
                a,
                vec![GeoPoint::new(0.001, 0.0), GeoPoint::new(0.0, 0.001)],
                AccessFlags::BOTH,
            )
            .unwrap();
        let net = b.build();
        assert_eq!(net.degree(a), 2);
        assert!(net.incident(a).all(|e| e == loop_edge));
    }

    #[test]
    fn pillars_are_stored_per_edge() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(GeoPoint::new(0.0, 0.0));
        let c = b.add_node(GeoPoint::new(0.0, 0.02));
        let straight = b.add_road(a, c).unwrap();
        let bend = GeoPoint::new(0.01, 0.01);
        let detour = b.add_edge_with_geometry(a, c, vec![bend], AccessFlags::BOTH).unwrap();
        let net = b.build();
        assert!(net.edge_pillars(straight).is_empty());
        assert_eq!(net.edge_pillars(detour), &[bend]);
    }
}

// ── Collaborator impls ────────────────────────────────────────────────────────

#[cfg(test)]
mod collaborators {
    use curb_core::{EdgeAccess, GeoPoint, NodeId, RoadGraph};
    use crate::{AccessFlags, RoadNetworkBuilder};

    #[test]
    fn unknown_node_has_no_position_or_edges() {
        let (net, ..) = super::helpers::small_network();
        assert!(net.node_position(NodeId(42)).is_none());
        assert_eq!(net.incident_edges(NodeId(42)).count(), 0);
    }

    #[test]
    fn incident_edges_report_orientation() {
        let (net, [n0, n1, n2, _], [e0, e1, ..]) = super::helpers::small_network();

        let at_n1: Vec<_> = net.incident_edges(n1).collect();
        assert_eq!(at_n1.len(), 2);

        // e0 is stored 0 → 1, so n1 is its stored end.
        assert_eq!(at_n1[0].edge, e0);
        assert_eq!(at_n1[0].adj, n0);
        assert!(at_n1[0].reversed);

        // e1 is stored 1 → 2, so n1 is its stored start.
        assert_eq!(at_n1[1].edge, e1);
        assert_eq!(at_n1[1].adj, n2);
        assert!(!at_n1[1].reversed);
    }

    #[test]
    fn stored_access_per_direction() {
        let (net, _, [e0, e1, ..]) = super::helpers::small_network();
        assert!(net.accessible(e0, false));
        assert!(net.accessible(e0, true));
        assert!(net.accessible(e1, false));
        assert!(!net.accessible(e1, true));
    }

    #[test]
    fn find_edge_respects_one_way() {
        let (net, [n0, n1, n2, _], [e0, e1, ..]) = super::helpers::small_network();
        assert_eq!(net.find_edge(n0, n1), Some(e0));
        assert_eq!(net.find_edge(n1, n0), Some(e0));
        assert_eq!(net.find_edge(n1, n2), Some(e1));
        assert_eq!(net.find_edge(n2, n1), None);
    }

    #[test]
    fn anchor_is_first_pillar_away_from_node() {
        let mut b = RoadNetworkBuilder::new();
        let a = b.add_node(GeoPoint::new(0.0, 0.0));
        let c = b.add_node(GeoPoint::new(0.0, 0.03));
        let first = GeoPoint::new(0.01, 0.01);
        let last = GeoPoint::new(-0.01, 0.02);
        b.add_edge_with_geometry(a, c, vec![first, last], AccessFlags::BOTH)
            .unwrap();
        let net = b.build();

        let from_a = net.incident_edges(a).next().unwrap();
        assert_eq!(from_a.anchor, first);
        let from_c = net.incident_edges(c).next().unwrap();
        assert_eq!(from_c.anchor, last);
    }

    #[test]
    fn straight_edge_anchor_is_neighbour() {
        let (net, [n0, n1, ..], _) = super::helpers::small_network();
        let e = net.incident_edges(n0).next().unwrap();
        assert_eq!(e.adj, n1);
        assert_eq!(e.anchor, net.node_pos[n1.index()]);
    }

    #[test]
    fn access_flags_allow() {
        assert!(AccessFlags::FORWARD.allows(false));
        assert!(!AccessFlags::FORWARD.allows(true));
        assert!(AccessFlags::BACKWARD.allows(true));
        assert!(!AccessFlags::NONE.allows(false));
        assert!(!AccessFlags::NONE.allows(true));
    }
}

// ── Spatial snap ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod snap {
    use curb_core::GeoPoint;
    use crate::RoadNetworkBuilder;

    #[test]
    fn snap_exact_position() {
        let (net, [n0, ..], _) = super::helpers::small_network();
        let snapped = net.snap_to_node(GeoPoint::new(0.0, 0.0)).unwrap();
        assert_eq!(snapped, n0);
    }

    #[test]
    fn snap_nearest() {
        let (net, [n0, n1, ..], _) = super::helpers::small_network();
        let near_n0 = net.snap_to_node(GeoPoint::new(0.0, 0.4)).unwrap();
        assert_eq!(near_n0, n0);
        let near_n1 = net.snap_to_node(GeoPoint::new(0.0, 0.6)).unwrap();
        assert_eq!(near_n1, n1);
    }

    #[test]
    fn empty_network_returns_none() {
        let net = RoadNetworkBuilder::new().build();
        assert!(net.snap_to_node(GeoPoint::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn k_nearest_order() {
        let (net, nodes, _) = super::helpers::small_network();
        let nearest = net.k_nearest_nodes(GeoPoint::new(0.0, 0.0), 2);
        assert_eq!(nearest[0], nodes[0]);
        // n1 (dist=1) and n3 (dist=1) are equidistant in lat/lon; either is valid.
        assert!(nearest[1] == nodes[1] || nearest[1] == nodes[3]);
    }
}
