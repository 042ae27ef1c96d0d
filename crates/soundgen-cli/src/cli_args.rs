//! CLI argument definitions for the soundgen command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

use soundgen_cli::commands::tone::ToneArgs;

/// soundgen - Procedural waveform synthesis
#[derive(Parser)]
#[command(name = "soundgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render a JSON recipe to a WAV file
    Render {
        /// Path to the recipe JSON file
        recipe: String,

        /// Output WAV path
        #[arg(short, long)]
        output: String,

        /// Base seed for noise sources without their own seed
        #[arg(long)]
        seed: Option<u32>,
    },

    /// Render a single waveform to a WAV file
    Tone {
        #[command(flatten)]
        args: ToneArgs,

        /// Output WAV path
        #[arg(short, long)]
        output: String,
    },
}
