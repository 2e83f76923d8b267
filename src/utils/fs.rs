use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{map_io_err, PatchResult};

/// Read a file's contents as string
pub fn read_file_to_string(path: impl AsRef<Path>) -> PatchResult<String> {
    let path = path.as_ref();
    debug!("Reading file: {}", path.display());

    fs::read_to_string(path).map_err(map_io_err(path))
}

/// Write string content to a file, overwriting any previous contents
pub fn write_file_sync(path: impl AsRef<Path>, content: &str) -> PatchResult<()> {
    let path = path.as_ref();
    debug!("Writing to file: {}", path.display());

    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(map_io_err(parent))?;
        }
    }

    fs::write(path, content).map_err(map_io_err(path))
}

/// Check if a file exists
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    path.exists() && path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_and_read_roundtrip() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test.txt");

        write_file_sync(&file_path, "Hello, world!").unwrap();
        assert!(file_exists(&file_path));

        let content = read_file_to_string(&file_path).unwrap();
        assert_eq!(content, "Hello, world!");
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("nested").join("deeper").join("test.txt");

        write_file_sync(&file_path, "content").unwrap();
        assert!(file_exists(&file_path));
    }

    #[test]
    fn test_read_missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("missing.txt");

        let err = read_file_to_string(&file_path).unwrap_err();
        let message = format!("{:?}", err);
        assert!(message.contains("missing.txt"));
    }
}
