use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use boidworld_cli::{build_world, load_settings, parse_edge_mode, parse_update_mode, run, validate};
use boidworld_shared::{EdgeMode, UpdateMode, WorldSettings};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[command(author, version, about = "Run a boid flocking world headless and print JSON snapshots", long_about = None)]
struct Args {
    /// JSON world settings; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// World width
    #[arg(long)]
    width: Option<f32>,

    /// World height
    #[arg(long)]
    height: Option<f32>,

    /// Boids per flock
    #[arg(short, long)]
    boids: Option<usize>,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 100)]
    ticks: u64,

    /// Write a snapshot every N ticks (0 = final state only)
    #[arg(short, long, default_value_t = 0)]
    every: u64,

    /// Seed for boid placement
    #[arg(short, long)]
    seed: Option<u64>,

    /// Edge policy: wrap or bounce
    #[arg(long, value_parser = parse_edge_mode)]
    edge: Option<EdgeMode>,

    /// Update order inside a flock: sequential or simultaneous
    #[arg(long, value_parser = parse_update_mode)]
    order: Option<UpdateMode>,

    /// Snapshot output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    fn settings(&self) -> Result<WorldSettings> {
        let mut settings = match &self.config {
            Some(path) => load_settings(path)?,
            None => WorldSettings::default(),
        };

        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(edge) = self.edge {
            settings.edge_mode = edge;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        for flock in settings.flocks.iter_mut() {
            if let Some(boids) = self.boids {
                flock.boid_count = boids;
            }
            if let Some(order) = self.order {
                flock.update_mode = order;
            }
        }

        validate(&settings)?;
        Ok(settings)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let settings = args.settings().context("Failed to load settings")?;
    log::info!("Boidworld starting...");
    log::info!("World: {}x{} ({:?} edges)", settings.width, settings.height, settings.edge_mode);
    log::info!("Flocks: {}, ticks: {}", settings.flocks.len(), args.ticks);

    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut world = build_world(&settings, &mut rng);

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    run(&mut world, args.ticks, args.every, &mut out).context("Simulation error")?;

    Ok(())
}
