// TOML config adapter - Settings loaded from TOML files and the environment

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RemoverError, RemoverResult};
use crate::planner::{DEFAULT_AUDIO_CODEC, DEFAULT_VIDEO_CODEC};
use crate::utils::logging::{LogFormat, LogLevel, LoggingConfig};

/// Environment variables that override file settings
pub const ENV_OVERRIDES: &[&str] = &[
    "CHUNKRM_FFMPEG",
    "CHUNKRM_VIDEO_CODEC",
    "CHUNKRM_AUDIO_CODEC",
    "CHUNKRM_LOG_LEVEL",
    "CHUNKRM_LOG_FORMAT",
];

/// Resolved settings for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Transcoder binary, looked up on PATH unless absolute
    pub ffmpeg_path: String,
    pub video_codec: String,
    pub audio_codec: String,
    pub log_level: LogLevel,
    pub log_format: LogFormat,
    /// Extension for generated output names
    pub output_extension: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ffmpeg_path: "ffmpeg".to_string(),
            video_codec: DEFAULT_VIDEO_CODEC.to_string(),
            audio_codec: DEFAULT_AUDIO_CODEC.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Pretty,
            output_extension: "mp4".to_string(),
        }
    }
}

impl Settings {
    /// Apply overrides from a variable lookup (normally `std::env::var`)
    pub fn apply_env<F>(&mut self, lookup: F) -> RemoverResult<usize>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut applied = 0;
        for &key in ENV_OVERRIDES {
            let Some(value) = lookup(key) else {
                continue;
            };
            debug!("Found environment override: {} = {}", key, value);
            match key {
                "CHUNKRM_FFMPEG" => self.ffmpeg_path = value,
                "CHUNKRM_VIDEO_CODEC" => self.video_codec = value,
                "CHUNKRM_AUDIO_CODEC" => self.audio_codec = value,
                "CHUNKRM_LOG_LEVEL" => {
                    self.log_level = value.parse::<LogLevel>().map_err(RemoverError::config)?
                }
                "CHUNKRM_LOG_FORMAT" => {
                    self.log_format = value.parse::<LogFormat>().map_err(RemoverError::config)?
                }
                _ => continue,
            }
            applied += 1;
        }
        Ok(applied)
    }

    /// Validate configuration
    pub fn validate(&self) -> RemoverResult<()> {
        for (name, value) in [
            ("ffmpeg_path", &self.ffmpeg_path),
            ("video_codec", &self.video_codec),
            ("audio_codec", &self.audio_codec),
            ("output_extension", &self.output_extension),
        ] {
            if value.trim().is_empty() {
                return Err(RemoverError::config(format!("{} cannot be empty", name)));
            }
        }
        if self.output_extension.contains(['/', '\\', '.']) {
            return Err(RemoverError::config(format!(
                "output_extension must be a bare extension, got '{}'",
                self.output_extension
            )));
        }
        Ok(())
    }

    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level,
            format: self.log_format,
        }
    }
}

/// On-disk layout: all keys live under a `[chunkrm]` table
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    chunkrm: Settings,
}

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Parse settings from TOML text
    pub fn parse(content: &str) -> RemoverResult<Settings> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| RemoverError::config(format!("Failed to parse TOML config: {}", e)))?;
        Ok(file.chunkrm)
    }

    /// Load settings from a file that must exist
    pub fn load(path: &Path) -> RemoverResult<Settings> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RemoverError::config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    /// Serialize settings to TOML text
    pub fn to_toml(settings: &Settings) -> RemoverResult<String> {
        let file = ConfigFile {
            chunkrm: settings.clone(),
        };
        toml::to_string_pretty(&file)
            .map_err(|e| RemoverError::config(format!("Failed to serialize config: {}", e)))
    }

    /// Candidate config locations, in lookup order
    pub fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from("chunkrm.toml"),
            PathBuf::from("config").join("chunkrm.toml"),
        ];
        if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(dir).join("chunkrm").join("config.toml"));
        } else if let Some(home) = std::env::var_os("HOME") {
            paths.push(
                PathBuf::from(home)
                    .join(".config")
                    .join("chunkrm")
                    .join("config.toml"),
            );
        }
        paths
    }

    /// Load the first config file that exists, if any
    pub fn discover() -> RemoverResult<Option<(PathBuf, Settings)>> {
        for path in Self::default_config_paths() {
            if path.is_file() {
                let settings = Self::load(&path)?;
                return Ok(Some((path, settings)));
            }
        }
        Ok(None)
    }
}
