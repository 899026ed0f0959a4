//! campus: smallest end-to-end example for the rust_nav map service.
//!
//! Builds a synthetic campus map in code, then exercises every query the
//! service exposes: snapping and routing, turn-by-turn directions, name
//! autocomplete and exact place lookup.  Set `RUST_LOG=debug` to see the
//! per-query router logs.

mod network;

use std::time::Instant;

use anyhow::Result;

use nav_core::NavConfig;
use nav_service::{MapServiceBuilder, RouteQuery};

use network::build_campus;

// ── Constants ─────────────────────────────────────────────────────────────────

const MAX_EXPANSIONS: usize = 10_000;
const PREFIXES: [&str; 3] = ["sather", "s", "doe"];

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== campus: rust_nav map service ===");
    println!();

    // 1. Build the service.
    let (vertices, ways, landmarks) = build_campus();
    let config = NavConfig { max_expansions: Some(MAX_EXPANSIONS), ..NavConfig::default() };
    let t0 = Instant::now();
    let service = MapServiceBuilder::new()
        .config(config)
        .vertices(vertices)
        .ways(ways)
        .build()?;
    println!(
        "Map: {} vertices, {} edges, {} searchable names (built in {:.3} ms)",
        service.graph().vertex_count(),
        service.graph().edge_count(),
        service.index().len(),
        t0.elapsed().as_secs_f64() * 1e3,
    );
    println!();

    // 2. Route between two raw coordinates near the landmarks.
    let from = landmarks.bancroft_west.pos;
    let to = landmarks.college_south.pos;
    let path = service.shortest_path(from.lon + 1e-4, from.lat, to.lon, to.lat - 1e-4)?;
    let miles = service.graph().path_length(&path)?;
    let ids: Vec<String> = path.iter().map(ToString::to_string).collect();
    println!("Route {from} -> {to}: {:.3} miles", miles);
    println!("  via {}", ids.join(" -> "));

    // 3. Directions.
    println!();
    println!("Directions:");
    for (i, line) in service.route_directions_text(&path)?.iter().enumerate() {
        println!("  {}. {line}", i + 1);
    }

    // 4. Batch routing; the last query snaps both ends to one vertex.
    let gate = landmarks.sather_gate.pos;
    let queries = [
        RouteQuery::new(from.lon, from.lat, gate.lon, gate.lat),
        RouteQuery::new(gate.lon, gate.lat, to.lon, to.lat),
        RouteQuery::new(gate.lon, gate.lat, gate.lon, gate.lat),
    ];
    println!();
    println!("{:<6} {:<10} {}", "Query", "Vertices", "Result");
    println!("{}", "-".repeat(40));
    for (i, result) in service.shortest_paths(&queries).iter().enumerate() {
        match result {
            Ok(path) => println!("{:<6} {:<10} ok", i, path.len()),
            Err(e) => println!("{:<6} {:<10} {e}", i, "-"),
        }
    }

    // 5. Place search.
    println!();
    for prefix in PREFIXES {
        println!("prefix {prefix:?}: {:?}", service.prefix_search(prefix));
    }
    for place in service.exact_lookup("sather gate") {
        println!("exact \"sather gate\": {} at ({:.4}, {:.4})", place.id, place.lon, place.lat);
    }
    log::info!("demo finished");

    Ok(())
}
