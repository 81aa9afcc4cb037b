//! OSM PBF loader — enabled with the `osm` Cargo feature.
//!
//! # Usage
//!
//! ```ignore
//! use std::path::Path;
//! use curb_network::osm::load_from_pbf;
//!
//! let network = load_from_pbf(Path::new("munich.osm.pbf"))?;
//! ```
//!
//! # What is loaded
//!
//! Only car-drivable `highway=*` ways are included (see [`is_drivable`]).
//! Each way is split into edges at **tower** nodes: its two ends plus every
//! node shared with another road way.  Nodes strictly between two towers
//! become the edge's pillar geometry, which is what gives the direction
//! resolver a usable local heading on curved roads.
//!
//! One-way tagging becomes [`AccessFlags`] on the stored way orientation;
//! nothing is duplicated per direction.
//!
//! # Memory note
//!
//! The loader buffers all OSM node positions in an `FxHashMap<i64, GeoPoint>`
//! for the first pass (ways reference node IDs by OSM integer ID).  The map
//! is freed before the network is built.

use std::path::Path;

use log::{debug, warn};
use osmpbf::{Element, ElementReader};
use rustc_hash::FxHashMap;

use curb_core::{GeoPoint, NodeId};

use crate::network::{AccessFlags, RoadNetwork, RoadNetworkBuilder};
use crate::{NetworkError, NetworkResult};

// ── Public entry point ────────────────────────────────────────────────────────

/// Load a road network from an OSM PBF file.
///
/// # Errors
///
/// Returns [`NetworkError::Io`] if the file cannot be opened and
/// [`NetworkError::Osm`] on parse errors.
pub fn load_from_pbf(path: &Path) -> NetworkResult<RoadNetwork> {
    std::fs::metadata(path)?;

    // ── Phase 1: collect all OSM nodes + road ways in one sequential pass ──
    let reader = ElementReader::from_path(path).map_err(|e| NetworkError::Osm(e.to_string()))?;

    let mut all_nodes: FxHashMap<i64, GeoPoint> = FxHashMap::default();
    let mut road_ways: Vec<OsmWay> = Vec::new();

    reader
        .for_each(|elem| match elem {
            Element::Node(n) => {
                all_nodes.insert(n.id(), GeoPoint::new(n.lat(), n.lon()));
            }
            Element::DenseNode(n) => {
                all_nodes.insert(n.id(), GeoPoint::new(n.lat(), n.lon()));
            }
            Element::Way(w) => {
                // Collect tags eagerly so &str lifetimes don't escape the closure.
                let tags: Vec<(&str, &str)> = w.tags().collect();
                let highway = tags
                    .iter()
                    .find(|(k, _)| *k == "highway")
                    .map(|(_, v)| *v);

                if let Some(highway) = highway.filter(|h| is_drivable(h)) {
                    road_ways.push(OsmWay {
                        id: w.id(),
                        refs: w.refs().collect(),
                        access: way_access(highway, &tags),
                    });
                }
            }
            _ => {}
        })
        .map_err(|e| NetworkError::Osm(e.to_string()))?;

    // ── Phase 2: drop dangling refs, count how many ways touch each node ──
    let mut ref_count: FxHashMap<i64, u32> = FxHashMap::default();
    for way in &mut road_ways {
        let before = way.refs.len();
        way.refs.retain(|r| all_nodes.contains_key(r));
        if way.refs.len() < before {
            warn!(
                "way {} references {} node(s) missing from the extract",
                way.id,
                before - way.refs.len()
            );
        }
        for r in &way.refs {
            *ref_count.entry(*r).or_insert(0) += 1;
        }
    }
    road_ways.retain(|w| w.refs.len() >= 2);

    // ── Phase 3: build network, splitting ways at tower nodes ─────────────
    let mut builder = RoadNetworkBuilder::with_capacity(ref_count.len() / 4, road_ways.len() * 2);
    let mut osm_to_curb: FxHashMap<i64, NodeId> = FxHashMap::default();

    for way in &road_ways {
        let last = way.refs.len() - 1;
        let mut base = tower(&mut builder, &mut osm_to_curb, &all_nodes, way.refs[0]);
        let mut pillars: Vec<GeoPoint> = Vec::new();

        for (i, osm_id) in way.refs.iter().enumerate().skip(1) {
            let pos = all_nodes[osm_id];
            let is_tower = i == last || ref_count.get(osm_id).copied().unwrap_or(0) > 1;
            if !is_tower {
                pillars.push(pos);
                continue;
            }
            let adj = tower(&mut builder, &mut osm_to_curb, &all_nodes, *osm_id);
            builder.add_edge_with_geometry(base, adj, std::mem::take(&mut pillars), way.access)?;
            base = adj;
        }
    }

    debug!(
        "loaded {} road ways → {} nodes, {} edges",
        road_ways.len(),
        builder.node_count(),
        builder.edge_count()
    );

    // Free the full node map.
    drop(all_nodes);

    Ok(builder.build())
}

// ── Internal types ────────────────────────────────────────────────────────────

struct OsmWay {
    id:     i64,
    refs:   Vec<i64>,
    access: AccessFlags,
}

/// `NodeId` for an OSM tower node, adding it on first sight.
fn tower(
    builder: &mut RoadNetworkBuilder,
    osm_to_curb: &mut FxHashMap<i64, NodeId>,
    all_nodes: &FxHashMap<i64, GeoPoint>,
    osm_id: i64,
) -> NodeId {
    *osm_to_curb
        .entry(osm_id)
        .or_insert_with(|| builder.add_node(all_nodes[&osm_id]))
}

// ── Tag helpers ───────────────────────────────────────────────────────────────

/// `true` if a `highway` value is drivable by car.
fn is_drivable(highway: &str) -> bool {
    !matches!(
        highway,
        "footway" | "path" | "cycleway" | "pedestrian" | "steps" | "track"
            | "bridleway" | "corridor" | "proposed" | "construction"
    )
}

/// Direction gating for a way, relative to its node order.
///
/// Motorways and motorway links are implicitly one-way in OSM convention.
/// `access=no|private` closes the way in both directions.
fn way_access(highway: &str, tags: &[(&str, &str)]) -> AccessFlags {
    let tag = |key: &str| tags.iter().find(|(k, _)| *k == key).map(|(_, v)| *v);

    if matches!(tag("access"), Some("no" | "private")) {
        return AccessFlags::NONE;
    }
    match tag("oneway") {
        Some("yes" | "1" | "true") => AccessFlags::FORWARD,
        Some("-1" | "reverse") => AccessFlags::BACKWARD,
        Some("no" | "0" | "false") => AccessFlags::BOTH,
        _ if matches!(highway, "motorway" | "motorway_link") => AccessFlags::FORWARD,
        _ => AccessFlags::BOTH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oneway_tags() {
        assert_eq!(way_access("residential", &[]), AccessFlags::BOTH);
        assert_eq!(way_access("residential", &[("oneway", "yes")]), AccessFlags::FORWARD);
        assert_eq!(way_access("residential", &[("oneway", "-1")]), AccessFlags::BACKWARD);
        assert_eq!(way_access("motorway", &[]), AccessFlags::FORWARD);
        assert_eq!(way_access("motorway", &[("oneway", "no")]), AccessFlags::BOTH);
        assert_eq!(way_access("service", &[("access", "private")]), AccessFlags::NONE);
    }

    #[test]
    fn drivable_classes() {
        assert!(is_drivable("primary"));
        assert!(is_drivable("unclassified"));
        assert!(!is_drivable("footway"));
        assert!(!is_drivable("cycleway"));
    }
}
