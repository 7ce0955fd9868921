//! Prints the joined outlines of a small room.
//!
//! Usage:
//! ```text
//! cargo run --example outline_dump
//! RUST_LOG=wallplan=trace cargo run --example outline_dump
//! ```

use std::f64::consts::FRAC_PI_2;

use wallplan::geometry::{Baseboard, Side};
use wallplan::operations::query::WallLength;
use wallplan::{Point2, WallData, WallId, WallStore, WallplanError};

fn main() -> Result<(), WallplanError> {
    // Default: WARN for everything, INFO for wallplan.
    // Override with RUST_LOG env var (e.g. RUST_LOG=wallplan=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("outline_dump=info".parse().unwrap_or_default())
        .add_directive("wallplan=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut store = WallStore::new();
    let corners = [
        Point2::new(0.0, 0.0),
        Point2::new(400.0, 0.0),
        Point2::new(400.0, 300.0),
        Point2::new(0.0, 300.0),
    ];
    let baseboard = Baseboard::new(1.0, 8.0, Some(0x00ff_ffff))?;

    let mut walls: Vec<WallId> = Vec::with_capacity(corners.len());
    for (i, start) in corners.iter().enumerate() {
        let end = corners[(i + 1) % corners.len()];
        let data = WallData::new(*start, end, 10.0)?.with_baseboard(Side::Left, Some(baseboard));
        walls.push(store.add_wall(data));
    }
    // The last wall bulges outward.
    store.set_arc_extent(walls[3], Some(-FRAC_PI_2))?;

    for (i, &wall) in walls.iter().enumerate() {
        let next = walls[(i + 1) % walls.len()];
        store.set_wall_at_end(wall, Some(next))?;
        store.set_wall_at_start(next, Some(wall))?;
    }

    for (i, &wall) in walls.iter().enumerate() {
        let length = WallLength::new(wall).execute(&store)?;
        println!("wall {i}: length {length:.2}");
        for include_baseboards in [false, true] {
            let points = store.points(wall, include_baseboards)?;
            println!("  baseboards={include_baseboards} ({} points)", points.len());
            for p in points {
                println!("    ({:.3}, {:.3})", p.x, p.y);
            }
        }
    }
    Ok(())
}
