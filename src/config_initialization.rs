//! Configuration initialization and hierarchy management

use std::path::PathBuf;

use tracing::info;

use crate::adapters::{Settings, TomlConfigAdapter};
use crate::cli::Cli;
use crate::error::RemoverResult;

/// Settings plus where they came from, for logging once the subscriber is up
#[derive(Debug, Clone)]
pub struct ResolvedSettings {
    pub settings: Settings,
    pub source: Option<PathBuf>,
    pub env_overrides: usize,
    pub cli_overrides: usize,
}

impl ResolvedSettings {
    /// Log the resolution summary
    pub fn log_summary(&self) {
        match &self.source {
            Some(path) => info!("Loaded configuration from: {}", path.display()),
            None => info!("No config file found, using defaults"),
        }
        if self.env_overrides > 0 {
            info!("Applied {} environment variable overrides", self.env_overrides);
        }
        if self.cli_overrides > 0 {
            info!("Applied {} CLI configuration overrides", self.cli_overrides);
        }
    }
}

/// Initialize configuration hierarchy following precedence: CLI > Env > File > Defaults
pub fn initialize_configuration_hierarchy(cli: &Cli) -> RemoverResult<ResolvedSettings> {
    initialize_with_env(cli, |key| std::env::var(key).ok())
}

/// Same as [`initialize_configuration_hierarchy`] with an explicit variable lookup
pub fn initialize_with_env<F>(cli: &Cli, lookup: F) -> RemoverResult<ResolvedSettings>
where
    F: Fn(&str) -> Option<String>,
{
    let (mut settings, source) = match &cli.config {
        Some(path) => (TomlConfigAdapter::load(path)?, Some(path.clone())),
        None => match TomlConfigAdapter::discover()? {
            Some((path, settings)) => (settings, Some(path)),
            None => (Settings::default(), None),
        },
    };

    let env_overrides = settings.apply_env(lookup)?;
    let cli_overrides = apply_cli_configuration_overrides(&mut settings, cli);
    settings.validate()?;

    Ok(ResolvedSettings {
        settings,
        source,
        env_overrides,
        cli_overrides,
    })
}

/// Apply CLI argument overrides to configuration
fn apply_cli_configuration_overrides(settings: &mut Settings, cli: &Cli) -> usize {
    let mut cli_overrides = 0;

    if let Some(level) = cli.log_level {
        settings.log_level = level;
        cli_overrides += 1;
    }
    if let Some(format) = cli.log_format {
        settings.log_format = format;
        cli_overrides += 1;
    }
    if let Some(ffmpeg) = &cli.ffmpeg {
        settings.ffmpeg_path = ffmpeg.clone();
        cli_overrides += 1;
    }
    if let Some(codec) = &cli.video_codec {
        settings.video_codec = codec.clone();
        cli_overrides += 1;
    }
    if let Some(codec) = &cli.audio_codec {
        settings.audio_codec = codec.clone();
        cli_overrides += 1;
    }

    cli_overrides
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::logging::LogLevel;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_beats_env_beats_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("settings.toml");
        std::fs::write(
            &config,
            concat!(
                "[chunkrm]\n",
                "video_codec = \"from-file\"\n",
                "audio_codec = \"from-file\"\n",
                "ffmpeg_path = \"from-file\"\n",
            ),
        )
        .unwrap();

        let config_arg = config.to_string_lossy().to_string();
        let cli = cli(&[
            "chunkrm",
            "--config",
            &config_arg,
            "--video-codec",
            "from-cli",
            "--log-level",
            "debug",
            "plan",
            "--input",
            "in.mp4",
        ]);

        let resolved = initialize_with_env(&cli, |key| match key {
            "CHUNKRM_VIDEO_CODEC" | "CHUNKRM_AUDIO_CODEC" => Some("from-env".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(resolved.settings.video_codec, "from-cli");
        assert_eq!(resolved.settings.audio_codec, "from-env");
        assert_eq!(resolved.settings.ffmpeg_path, "from-file");
        assert_eq!(resolved.settings.log_level, LogLevel::Debug);
        assert_eq!(resolved.source, Some(config));
        assert_eq!(resolved.env_overrides, 2);
        assert_eq!(resolved.cli_overrides, 2);
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let cli = cli(&[
            "chunkrm",
            "--config",
            "/definitely/not/here.toml",
            "plan",
            "--input",
            "in.mp4",
        ]);
        assert!(initialize_with_env(&cli, |_| None).is_err());
    }

    #[test]
    fn test_empty_codec_override_fails_validation() {
        let cli = cli(&["chunkrm", "--audio-codec", "", "plan", "--input", "in.mp4"]);
        assert!(initialize_with_env(&cli, |_| None).is_err());
    }
}
