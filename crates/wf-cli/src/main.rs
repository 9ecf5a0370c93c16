//! Command-line frontend and TCP server for the Wayfarer game engine.

mod commands;
mod config;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::{ServeArgs, WorldArgs};

#[derive(Parser)]
#[command(
    name = "wf",
    about = "Wayfarer, a multi-player text adventure server",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the game over TCP, one command per connection
    Serve(ServeArgs),

    /// Play in the terminal, reading commands from stdin
    Play {
        /// Name to play as
        #[arg(long)]
        player: String,

        #[command(flatten)]
        world: WorldArgs,
    },

    /// Load and validate the world files
    Check {
        /// Print the world summary as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        world: WorldArgs,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::run(&args),
        Commands::Play { player, world } => commands::play::run(&world, &player),
        Commands::Check { json, world } => commands::check::run(&world, json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
