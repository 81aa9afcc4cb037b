//! curbside — resolve legal arrive/depart edges for locations beside a road.
//!
//! Without arguments, probes a synthetic downtown network: one location on
//! each side of every landmark, then a batch of randomly jittered locations
//! snapped to their nearest node.  Built with the `osm` feature,
//! `curbside <file.osm.pbf> <lat> <lon> [right|left|any]` resolves a single
//! location against a real extract.
//!
//! Set `RUST_LOG=curb_direction=debug` to trace each decision.

mod network;

use std::time::Instant;

use anyhow::Result;
use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use curb_core::{GeoPoint, NodeId};
use curb_direction::{Curbside, DirectionResolver, EdgeConstraint, ResolvedDirections};

use network::build_network;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:            u64   = 42;
const RANDOM_QUERIES:  usize = 12;
const JITTER_DEG:      f64   = 0.003;  // ≈ 300 m
const CURB_OFFSET_DEG: f64   = 0.0002; // ≈ 20 m beside the node

const CURBSIDES: [Curbside; 3] = [Curbside::Right, Curbside::Left, Curbside::Any];

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        return run_single(&args);
    }

    println!("=== curbside — direction resolution demo ===");
    println!("Seed: {SEED}  |  Random queries: {RANDOM_QUERIES}");
    println!();

    // 1. Build road network.
    let (network, landmarks) = build_network()?;
    println!(
        "Road network: {} nodes, {} edges",
        network.node_count(),
        network.edge_count()
    );
    println!();

    let resolver = DirectionResolver::new(&network, &network);

    // 2. Landmarks, probed from just north and just south of the node.
    let probes = [
        ("main street", landmarks.main_st),
        ("one-way street", landmarks.one_way_mid),
        ("junction", landmarks.junction),
        ("cul-de-sac", landmarks.cul_de_sac),
    ];
    for (name, node) in probes {
        let pos = network.node_pos[node.index()];
        println!("{name}:");
        for (label, dlat) in [("north", CURB_OFFSET_DEG), ("south", -CURB_OFFSET_DEG)] {
            let query = GeoPoint::new(pos.lat + dlat, pos.lon);
            let res = resolver.resolve_directions(node, query)?;
            println!("  {label:<6} {res}");
        }
    }
    println!();

    // 3. Random locations, snapped and resolved as one batch.
    let mut rng = SmallRng::seed_from_u64(SEED);
    let mut queries: Vec<(NodeId, GeoPoint)> = Vec::with_capacity(RANDOM_QUERIES);
    let mut wanted: Vec<Curbside> = Vec::with_capacity(RANDOM_QUERIES);
    for _ in 0..RANDOM_QUERIES {
        let around = network.node_pos[rng.gen_range(0..network.node_count())];
        let query = GeoPoint::new(
            around.lat + rng.gen_range(-JITTER_DEG..JITTER_DEG),
            around.lon + rng.gen_range(-JITTER_DEG..JITTER_DEG),
        );
        let Some(node) = network.snap_to_node(query) else { continue };
        queries.push((node, query));
        wanted.push(CURBSIDES[rng.gen_range(0..CURBSIDES.len())]);
    }

    let t0 = Instant::now();
    let results = resolver.resolve_all(&queries);
    info!("resolved {} queries in {:?}", results.len(), t0.elapsed());

    println!("{:<26} {:<11} {:<6} {:<12} {:<12}", "Query", "Node", "Curb", "Arrive", "Depart");
    println!("{}", "-".repeat(71));
    for ((&(node, query), res), curbside) in queries.iter().zip(&results).zip(&wanted) {
        match res {
            Ok(res) => print_row(node, query, res, *curbside),
            Err(e) => eprintln!("{node} @ {query}: {e}"),
        }
    }

    Ok(())
}

fn print_row(node: NodeId, query: GeoPoint, res: &ResolvedDirections, curbside: Curbside) {
    println!(
        "{:<26} {:<11} {:<6} {:<12} {:<12}",
        query.to_string(),
        node.to_string(),
        curbside.to_string(),
        describe(res.in_edge(curbside)),
        describe(res.out_edge(curbside)),
    );
}

fn describe(constraint: EdgeConstraint) -> String {
    match constraint {
        EdgeConstraint::Any => "any".into(),
        EdgeConstraint::Forbidden => "forbidden".into(),
        EdgeConstraint::Exactly(edge) => edge.to_string(),
    }
}

// ── OSM mode ──────────────────────────────────────────────────────────────────

#[cfg(feature = "osm")]
fn run_single(args: &[String]) -> Result<()> {
    use anyhow::Context;

    let [path, lat, lon, rest @ ..] = args else {
        anyhow::bail!("usage: curbside <file.osm.pbf> <lat> <lon> [right|left|any]");
    };
    let query = GeoPoint::new(
        lat.parse().context("latitude is not a number")?,
        lon.parse().context("longitude is not a number")?,
    );
    let curbside: Curbside = rest.first().map(String::as_str).unwrap_or("").parse()?;

    let t0 = Instant::now();
    let network = curb_network::osm::load_from_pbf(std::path::Path::new(path))?;
    println!(
        "Loaded {} nodes, {} edges in {:.2} s",
        network.node_count(),
        network.edge_count(),
        t0.elapsed().as_secs_f64()
    );

    let node = network.snap_to_node(query).context("network has no nodes")?;
    let res = DirectionResolver::new(&network, &network).resolve_directions(node, query)?;
    println!("{node} @ {query}: {res}");
    print_row(node, query, &res, curbside);
    Ok(())
}

#[cfg(not(feature = "osm"))]
fn run_single(_args: &[String]) -> Result<()> {
    anyhow::bail!("loading an OSM extract requires the `osm` feature")
}
