//! deskorb - Floating desktop launcher orb
//!
//! Entry point for the orb, the gallery viewer, and the image utilities.

mod cli;
mod config;
mod core;
mod gui;

use clap::Parser;
use cli::{Args, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let default_filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let config = config::load()?;

    match args.command {
        Some(Commands::View { root }) => {
            let root = cli::resolve_viewer_root(&config, root)?;
            tracing::info!("Starting gallery at {}", root.display());
            gui::run_gallery(config, root)
        }
        Some(Commands::Crop {
            input,
            output,
            size,
        }) => cli::run_crop(&input, &output, size),
        Some(Commands::Icon { input, output }) => cli::run_icon(&input, &output),
        None => {
            tracing::info!("Starting floating orb");
            gui::run_orb(config)
        }
    }
}
