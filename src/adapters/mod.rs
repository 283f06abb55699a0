// Adapters - External system implementations

pub mod cut_list;
pub mod exec_ffmpeg;
pub mod toml_config;

// Re-export adapters
pub use cut_list::CutListAdapter;
pub use exec_ffmpeg::FfmpegAdapter;
pub use toml_config::{Settings, TomlConfigAdapter};
