//! Circle Arena headless driver
//!
//! Runs the simulation loop without a window and prints the final body
//! states as JSON, the same data a renderer would draw from.
//!
//! Usage: `circle-arena [CONFIG.json] [FRAMES]`

use std::path::PathBuf;

use anyhow::{Context, Result};

use circle_arena::SimConfig;
use circle_arena::sim::{World, step_frame};

const DEFAULT_FRAMES: u64 = 600;

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Circle Arena (headless) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => {
            let path = PathBuf::from(path);
            SimConfig::load(&path)
                .with_context(|| format!("failed to load config {}", path.display()))?
        }
        None => SimConfig::default(),
    };
    let frames = match args.next() {
        Some(n) => n
            .parse::<u64>()
            .with_context(|| format!("invalid frame count {n:?}"))?,
        None => DEFAULT_FRAMES,
    };

    let mut world = World::populate(&config, config.seed).context("failed to build world")?;
    let start_energy = world.total_kinetic_energy();

    let mut pair_hits = 0;
    let mut boundary_hits = 0;
    for frame in 0..frames {
        let report = step_frame(&mut world, &config);
        if report.boundary_hits > 0 || report.pair_hits > 0 {
            log::debug!(
                "Frame {frame}: {} pair hits, {} wall hits",
                report.pair_hits,
                report.boundary_hits
            );
        }
        pair_hits += report.pair_hits;
        boundary_hits += report.boundary_hits;
    }

    log::info!(
        "Ran {frames} frames ({} mode): {pair_hits} pair hits, {boundary_hits} wall hits",
        config.pair_mode.as_str()
    );
    log::info!(
        "Kinetic energy {start_energy:.3} -> {:.3}",
        world.total_kinetic_energy()
    );

    let snapshot = serde_json::to_string_pretty(world.bodies()).context("failed to encode bodies")?;
    println!("{snapshot}");
    Ok(())
}
