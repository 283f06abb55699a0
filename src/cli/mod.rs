//! CLI module for chunk-remover
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::utils::logging::{LogFormat, LogLevel};

pub mod args;
pub mod commands;
pub mod session;

/// Chunk remover
///
/// Cuts one or more time ranges out of a video and joins the remaining
/// pieces, keeping audio and video in sync.
#[derive(Parser, Debug)]
#[command(name = "chunkrm")]
#[command(about = "Remove chunks from a video with ffmpeg")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Config file (default: chunkrm.toml, config/chunkrm.toml, then the user config dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Logging level
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    /// Log output format (pretty, compact, json)
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,

    /// ffmpeg binary to run
    #[arg(long, global = true, value_name = "PATH")]
    pub ffmpeg: Option<String>,

    /// Video encoder for the output
    #[arg(long, global = true)]
    pub video_codec: Option<String>,

    /// Audio encoder for the output
    #[arg(long, global = true)]
    pub audio_codec: Option<String>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remove chunks and write the edited video
    Cut(args::CutArgs),
    /// Show the keep segments, filter graph and ffmpeg command without running it
    Plan(args::PlanArgs),
    /// Build the chunk list interactively from stdin
    Edit(args::EditArgs),
}
