//! Synthetic street layout for the curbside demo.
//!
//! Seven nodes laid out on a few blocks of downtown Mobile, Alabama, chosen so
//! every resolution outcome shows up at least once.

use curb_core::{GeoPoint, NodeId};
use curb_network::{AccessFlags, NetworkResult, RoadNetwork, RoadNetworkBuilder};

/// Named nodes of [`build_network`].
pub struct Landmarks {
    /// Mid-block on a two-way street: side-specific pairings.
    pub main_st:     NodeId,
    /// Mid-block on a one-way street: a single pairing.
    pub one_way_mid: NodeId,
    /// Three roads meet: unrestricted.
    pub junction:    NodeId,
    /// End of a curved cul-de-sac: dead end.
    pub cul_de_sac:  NodeId,
}

/// ```text
///  one_way_start ──▶ one_way_mid ──▶ one_way_end
///       │                                 │
///   west_end ───── main_st ───────── junction
///                                         ╰─╮
///                                      cul_de_sac
/// ```
pub fn build_network() -> NetworkResult<(RoadNetwork, Landmarks)> {
    let mut b = RoadNetworkBuilder::new();

    let one_way_start = b.add_node(GeoPoint::new(30.695, -88.060));
    let one_way_mid   = b.add_node(GeoPoint::new(30.695, -88.050));
    let one_way_end   = b.add_node(GeoPoint::new(30.695, -88.040));
    let west_end      = b.add_node(GeoPoint::new(30.690, -88.060));
    let main_st       = b.add_node(GeoPoint::new(30.690, -88.050));
    let junction      = b.add_node(GeoPoint::new(30.690, -88.040));
    let cul_de_sac    = b.add_node(GeoPoint::new(30.685, -88.035));

    b.add_one_way(one_way_start, one_way_mid)?;
    b.add_one_way(one_way_mid, one_way_end)?;
    b.add_road(west_end, one_way_start)?;
    b.add_road(west_end, main_st)?;
    b.add_road(main_st, junction)?;
    b.add_road(one_way_end, junction)?;
    // Bends south before swinging east into the cul-de-sac.
    b.add_edge_with_geometry(
        junction,
        cul_de_sac,
        vec![GeoPoint::new(30.686, -88.040)],
        AccessFlags::BOTH,
    )?;

    let landmarks = Landmarks { main_st, one_way_mid, junction, cul_de_sac };
    Ok((b.build(), landmarks))
}
