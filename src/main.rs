//! Chunk Remover CLI
//!
//! Cuts time ranges out of a video and joins what is left with ffmpeg.
//!
//! # Usage
//!
//! ```bash
//! chunkrm cut --input talk.mp4 --remove 00:10-00:20 --remove 01:05-01:30
//! chunkrm plan --input talk.mp4 --cut-list cuts.toml --json
//! chunkrm edit --input talk.mp4
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;

use chunk_remover::app::DefaultAppContainer;
use chunk_remover::cli::{commands, Cli, Commands};
use chunk_remover::config_initialization::initialize_configuration_hierarchy;
use chunk_remover::utils::logging::init_logging;

/// Main entry point for the chunkrm CLI application
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let resolved = initialize_configuration_hierarchy(&cli)?;
    init_logging(&resolved.settings.logging());
    resolved.log_summary();

    let settings = resolved.settings;
    let container = DefaultAppContainer::new(&settings);

    match cli.command {
        Commands::Cut(args) => {
            info!("Executing cut command");
            commands::cut(args, &container, &settings).await
        }
        Commands::Plan(args) => {
            info!("Executing plan command");
            commands::plan(args, &container, &settings)
        }
        Commands::Edit(args) => {
            info!("Executing edit command");
            commands::edit(args, &container, &settings).await
        }
    }
}
