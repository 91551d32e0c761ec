//! DroneCover CLI - evolve drone placements that cover a target field.

mod commands;
mod config;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dronecover")]
#[command(author, version, about = "DroneCover - Genetic drone coverage placement", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default dronecover.toml
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Generate a random target field
    Targets {
        /// Number of targets (default: random in [30, 100))
        #[arg(short, long)]
        count: Option<usize>,

        /// Seed for target generation
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output JSON file
        #[arg(short, long)]
        output: String,
    },

    /// Evolve a drone placement
    Run(commands::run::RunArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Targets { count, seed, output } => commands::targets::run(count, seed, &output),
        Commands::Run(args) => commands::run::run(args, cli.verbose),
    }
}
