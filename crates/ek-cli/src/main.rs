//! CLI frontend for the Elektron bouncing-particle toolkit.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use ek_sim::SimConfig;

#[derive(Parser)]
#[command(
    name = "ek",
    about = "Elektron — bouncing-particle simulation and trace tools",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a headless simulation and record a kinematics trace
    Run {
        /// Number of frames to simulate
        #[arg(short, long, default_value = "600")]
        frames: u64,

        /// RNG seed for deterministic spawning
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Viewport width
        #[arg(long, default_value = "800")]
        width: f64,

        /// Viewport height
        #[arg(long, default_value = "600")]
        height: f64,

        /// Number of particles
        #[arg(short = 'n', long, default_value = "5")]
        particles: usize,

        /// Record one trace line per particle every N frames
        #[arg(short, long, default_value = "10")]
        every: u64,

        /// Trace output path
        #[arg(short, long, default_value = "electron_data.txt")]
        trace: PathBuf,

        /// List every bounce event
        #[arg(short, long)]
        verbose: bool,
    },

    /// Summarize a previously recorded trace file
    Stats {
        /// Trace file to read
        trace: PathBuf,

        /// Particles per logged frame (lane stride)
        #[arg(short = 'n', long, default_value = "1")]
        particles: usize,

        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            frames,
            seed,
            width,
            height,
            particles,
            every,
            trace,
            verbose,
        } => {
            let config = SimConfig::default()
                .with_bounds(width, height)
                .with_particles(particles)
                .with_seed(seed)
                .with_trace_every(every);
            commands::run::run(config, frames, &trace, verbose)
        }
        Commands::Stats {
            trace,
            particles,
            json,
        } => commands::stats::run(&trace, particles, json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
