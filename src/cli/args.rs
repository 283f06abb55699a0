//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Where removal intervals come from
#[derive(Args, Debug, Clone, Default)]
pub struct IntervalArgs {
    /// Chunk to remove as START-END (HH:MM:SS.fff or MM:SS.fff), repeatable
    #[arg(short, long = "remove", value_name = "START-END")]
    pub remove: Vec<String>,

    /// File listing chunks to remove (.toml, .json, .yaml)
    #[arg(long, value_name = "FILE")]
    pub cut_list: Option<PathBuf>,
}

/// Arguments for the cut command
#[derive(Args, Debug)]
pub struct CutArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file path (default: <input stem>_cut.<extension>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub intervals: IntervalArgs,
}

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file path (default: <input stem>_cut.<extension>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub intervals: IntervalArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the edit command
#[derive(Args, Debug)]
pub struct EditArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file path (default: <input stem>_cut.<extension>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub intervals: IntervalArgs,
}
