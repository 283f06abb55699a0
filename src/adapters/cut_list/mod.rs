//! Cut list files
//!
//! A cut list names the chunks to remove with text times, one entry per
//! chunk under `remove`:
//!
//! ```toml
//! [[remove]]
//! start = "00:00:10"
//! end = "00:00:20"
//! ```
//!
//! The same shape is accepted as JSON or YAML, picked by file extension.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::store::IntervalStore;
use crate::error::{RemoverError, RemoverResult};

/// Serialization format of a cut list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutListFormat {
    Toml,
    Json,
    Yaml,
}

impl CutListFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_string_lossy().to_lowercase();
        match extension.as_str() {
            "toml" => Some(CutListFormat::Toml),
            "json" => Some(CutListFormat::Json),
            "yaml" | "yml" => Some(CutListFormat::Yaml),
            _ => None,
        }
    }
}

/// One chunk to remove, as written by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutListEntry {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CutListFile {
    #[serde(default)]
    remove: Vec<CutListEntry>,
}

/// Reads cut list files into an [`IntervalStore`]
pub struct CutListAdapter;

impl CutListAdapter {
    /// Parse the entries of a cut list without validating the times
    pub fn parse(content: &str, format: CutListFormat) -> Result<Vec<CutListEntry>, String> {
        let file: CutListFile = match format {
            CutListFormat::Toml => toml::from_str(content).map_err(|e| e.to_string())?,
            CutListFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string())?,
            CutListFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string())?,
        };
        Ok(file.remove)
    }

    /// Add every entry of the cut list at `path` to `store`, in file order.
    ///
    /// Stops at the first invalid entry; entries before it stay added.
    pub fn load_into(path: &Path, store: &mut IntervalStore) -> RemoverResult<usize> {
        let cut_list_error = |message: String| RemoverError::CutList {
            path: path.to_path_buf(),
            message,
        };

        let format = CutListFormat::from_path(path).ok_or_else(|| {
            cut_list_error("unknown format, expected a .toml, .json or .yaml file".to_string())
        })?;
        let content = std::fs::read_to_string(path).map_err(|e| cut_list_error(e.to_string()))?;
        let entries = Self::parse(&content, format).map_err(cut_list_error)?;

        for (position, entry) in entries.iter().enumerate() {
            store
                .add(&entry.start, &entry.end)
                .map_err(|e| cut_list_error(format!("entry {}: {}", position + 1, e)))?;
        }

        debug!(path = %path.display(), entries = entries.len(), "Loaded cut list");
        Ok(entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(CutListFormat::from_path(Path::new("a.toml")), Some(CutListFormat::Toml));
        assert_eq!(CutListFormat::from_path(Path::new("a.JSON")), Some(CutListFormat::Json));
        assert_eq!(CutListFormat::from_path(Path::new("a.yml")), Some(CutListFormat::Yaml));
        assert_eq!(CutListFormat::from_path(Path::new("a.txt")), None);
        assert_eq!(CutListFormat::from_path(Path::new("cuts")), None);
    }

    #[test]
    fn test_parse_all_formats() {
        let expected = vec![CutListEntry {
            start: "00:10".to_string(),
            end: "00:20".to_string(),
        }];

        let toml = "[[remove]]\nstart = \"00:10\"\nend = \"00:20\"\n";
        let json = r#"{"remove": [{"start": "00:10", "end": "00:20"}]}"#;
        let yaml = "remove:\n  - start: \"00:10\"\n    end: \"00:20\"\n";

        assert_eq!(CutListAdapter::parse(toml, CutListFormat::Toml).unwrap(), expected);
        assert_eq!(CutListAdapter::parse(json, CutListFormat::Json).unwrap(), expected);
        assert_eq!(CutListAdapter::parse(yaml, CutListFormat::Yaml).unwrap(), expected);
    }

    #[test]
    fn test_load_into_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cuts.toml");
        std::fs::write(
            &path,
            "[[remove]]\nstart = \"00:01:00\"\nend = \"00:01:30\"\n\n\
             [[remove]]\nstart = \"00:00:10\"\nend = \"00:00:20\"\n",
        )
        .unwrap();

        let mut store = IntervalStore::new();
        assert_eq!(CutListAdapter::load_into(&path, &mut store).unwrap(), 2);
        assert_eq!(store.snapshot()[0].start().as_seconds(), 10.0);
    }

    #[test]
    fn test_load_reports_bad_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cuts.json");
        std::fs::write(
            &path,
            r#"{"remove": [
                {"start": "00:05", "end": "00:15"},
                {"start": "00:10", "end": "00:20"}
            ]}"#,
        )
        .unwrap();

        let mut store = IntervalStore::new();
        let err = CutListAdapter::load_into(&path, &mut store).unwrap_err();
        match err {
            RemoverError::CutList { message, .. } => {
                assert!(message.starts_with("entry 2:"), "{message}")
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let mut store = IntervalStore::new();
        let err = CutListAdapter::load_into(Path::new("cuts.csv"), &mut store).unwrap_err();
        assert!(matches!(err, RemoverError::CutList { .. }));
    }
}
