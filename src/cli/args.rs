//! CLI argument definitions
//!
//! Uses clap derive macros for argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// deskorb - Floating desktop launcher orb with a folder gallery
#[derive(Parser, Debug)]
#[command(name = "deskorb")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Subcommands (no subcommand starts the floating orb)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse a folder of image folders
    View {
        /// Root directory (defaults to the configured root, then the
        /// pictures directory)
        root: Option<PathBuf>,
    },

    /// Center-crop an image to a square and resize it
    Crop {
        /// Source image
        input: PathBuf,
        /// Destination image (format follows the extension)
        output: PathBuf,
        /// Output side length in pixels
        #[arg(short, long, default_value_t = 60)]
        size: u32,
    },

    /// Export a multi-resolution .ico from an image
    Icon {
        /// Source image
        input: PathBuf,
        /// Destination .ico file
        output: PathBuf,
    },
}
