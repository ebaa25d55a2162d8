//! pathviz: run a grid search from the command line and show what it visited.

mod render;

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use pathviz_core::CellId;
use pathviz_search::Strategy;
use pathviz_sim::{Command, FnSink, FramePacer, NoPacing, Pacer, SimConfig, Simulation, Visit};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Search strategy: bfs, dfs or best-first
    #[arg(short, long, default_value = "bfs")]
    algorithm: Strategy,

    /// Start cell id (row-major); defaults to the configured start
    #[arg(short, long)]
    start: Option<usize>,

    /// End cell id (row-major); defaults to the configured end
    #[arg(short, long)]
    end: Option<usize>,

    /// Number of walls to scatter at random
    #[arg(short, long, default_value = "0")]
    walls: usize,

    /// Seed for wall placement
    #[arg(long, default_value = "42")]
    seed: u64,

    /// JSON configuration file; missing fields take their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Steps shown per second
    #[arg(long)]
    fps: Option<u32>,

    /// Run without pausing between steps
    #[arg(long)]
    no_delay: bool,

    /// Print every visit as it happens
    #[arg(long)]
    trace: bool,
}

fn load_config(args: &Args) -> Result<SimConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            serde_json::from_str(&text)?
        }
        None => SimConfig::default(),
    };
    if let Some(start) = args.start {
        config.start = CellId(start);
    }
    if let Some(end) = args.end {
        config.end = CellId(end);
    }
    if let Some(fps) = args.fps {
        config.frames_per_second = fps;
    }
    config.validate()?;
    Ok(config)
}

/// Scatter up to `count` walls on free non-endpoint cells.
fn scatter_walls<P: Pacer>(
    sim: &mut Simulation<P>,
    count: usize,
    seed: u64,
) -> Result<usize, Box<dyn std::error::Error>> {
    let mut free: Vec<CellId> = sim
        .grid()
        .iter()
        .filter(|(_, c)| !c.wall && !c.is_endpoint())
        .map(|(id, _)| id)
        .collect();
    let count = count.min(free.len());

    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..count {
        let i = rng.random_range(0..free.len());
        let id = free.swap_remove(i);
        sim.apply(Command::ToggleWall(id))?;
    }
    Ok(count)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(&args)?;

    let pacer: Box<dyn Pacer> = if args.no_delay {
        Box::new(NoPacing)
    } else {
        Box::new(FramePacer::from_fps(config.frames_per_second))
    };
    let mut sim = Simulation::new(&config, pacer)?;

    let placed = scatter_walls(&mut sim, args.walls, args.seed)?;
    if placed > 0 {
        log::info!("placed {placed} walls (seed {})", args.seed);
    }

    sim.apply(Command::SelectStrategy(args.algorithm))?;
    let run = sim.start_run(config.start)?;
    log::info!(
        "{run}: {} on {} grid from {} to {}",
        args.algorithm,
        config.dims(),
        config.start,
        config.end
    );

    let dims = config.dims();
    let trace = args.trace;
    let mut sink = FnSink(|v: Visit| {
        if trace {
            println!("{} visited {} at {}", v.run, v.cell, dims.point(v.cell));
        }
    });
    sim.run_until_idle(&mut sink);

    let report = sim
        .report(run)
        .copied()
        .ok_or("run ended without a report")?;

    print!("{}", render::frame(sim.grid()));
    println!("{}", render::legend(sim.grid()));
    println!(
        "{}: {} after {} visits",
        report.strategy, report.outcome, report.visits
    );
    Ok(())
}
