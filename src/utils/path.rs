//! Output path helpers

use std::path::{Path, PathBuf};

use crate::error::{RemoverError, RemoverResult};

/// Default output next to the input: `<stem>_cut.<extension>`
pub fn default_output_path(input: &Path, extension: &str) -> RemoverResult<PathBuf> {
    let stem = input
        .file_stem()
        .ok_or_else(|| {
            RemoverError::config(format!("Invalid input file path: {}", input.display()))
        })?
        .to_string_lossy();

    Ok(input.with_file_name(format!("{}_cut.{}", stem, extension)))
}

/// True when both paths name the same file, resolving them if they exist
pub fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        let output = default_output_path(Path::new("/videos/talk.mov"), "mp4").unwrap();
        assert_eq!(output, PathBuf::from("/videos/talk_cut.mp4"));

        let output = default_output_path(Path::new("clip"), "mkv").unwrap();
        assert_eq!(output, PathBuf::from("clip_cut.mkv"));
    }

    #[test]
    fn test_default_output_path_rejects_root() {
        assert!(default_output_path(Path::new("/"), "mp4").is_err());
    }

    #[test]
    fn test_same_file() {
        assert!(same_file(Path::new("a/b.mp4"), Path::new("a/b.mp4")));
        assert!(!same_file(Path::new("a/b.mp4"), Path::new("a/c.mp4")));
    }
}
