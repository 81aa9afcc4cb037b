//! Unit tests for curb-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, NodeId};

    #[test]
    fn index_matches_inner() {
        assert_eq!(EdgeId(42).index(), 42);
        assert_eq!(NodeId(0).index(), 0);
    }

    #[test]
    fn ordering() {
        assert!(EdgeId(0) < EdgeId(1));
        assert!(NodeId(100) > NodeId(99));
    }

    #[test]
    fn invalid_placeholder_is_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
        assert_eq!(EdgeId(3).to_string(), "EdgeId(3)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{CurbError, GeoPoint};

    #[test]
    fn validity_bounds() {
        assert!(GeoPoint::new(90.0, 180.0).is_valid());
        assert!(GeoPoint::new(-90.0, -180.0).is_valid());
        assert!(!GeoPoint::new(90.5, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, -180.1).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn validated_reports_the_point() {
        let bad = GeoPoint::new(91.0, 0.0);
        assert_eq!(bad.validated(), Err(CurbError::InvalidCoordinate(bad)));
        let good = GeoPoint::new(1.0, 1.0);
        assert_eq!(good.validated(), Ok(good));
    }
}

#[cfg(test)]
mod graph {
    use crate::{EdgeAccess, EdgeId, GeoPoint, IncidentEdge, NodeId};

    #[test]
    fn closures_are_access_predicates() {
        // Edge 0 is forward-only; everything else is open.
        let access = |edge: EdgeId, reverse: bool| !(edge == EdgeId(0) && reverse);
        assert!(access.accessible(EdgeId(0), false));
        assert!(!access.accessible(EdgeId(0), true));
        assert!(access.accessible(EdgeId(1), true));
    }

    #[test]
    fn direction_flags_follow_stored_orientation() {
        let stored_start = IncidentEdge {
            edge: EdgeId(0),
            adj: NodeId(1),
            reversed: false,
            anchor: GeoPoint::new(0.0, 1.0),
        };
        // Leaving the stored start is the forward direction.
        assert!(!stored_start.outbound_reverse());
        assert!(stored_start.inbound_reverse());

        let stored_end = IncidentEdge { reversed: true, ..stored_start };
        assert!(stored_end.outbound_reverse());
        assert!(!stored_end.inbound_reverse());
    }
}
