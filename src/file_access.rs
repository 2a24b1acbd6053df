/*============================================================
  Synavera Project: Syn-Log
  Module: synlog_core::file_access
  Etiquette: Synavera Script Etiquette — Rust Profile v1.1.1
  ------------------------------------------------------------
  Purpose:
    Open the backing log file for appending or random-access
    reading, creating it when absent.

  Security / Safety Notes:
    Existing files are never truncated; creation happens at
    most once per open.

  Dependencies:
    std::fs::OpenOptions.

  Operational Scope:
    Every write and tail read acquires its handle here and
    drops it before returning.

  Revision History:
    2025-11-02 COD  Authored ensure-then-open access layer.
  ------------------------------------------------------------
  SSE Principles Observed:
    - Scoped handles released on every exit path
    - Single bounded retry after creation
============================================================*/

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

use crate::error::{Result, SynlogError};

/// Open `path` for appending, creating it first when missing.
pub fn open_for_append(path: &Path) -> Result<File> {
    let mut options = OpenOptions::new();
    options.append(true);
    open_or_create(path, &options, "append")
}

/// Open `path` for random-access reads, creating it first when missing.
pub fn open_for_read(path: &Path) -> Result<File> {
    let mut options = OpenOptions::new();
    options.read(true);
    open_or_create(path, &options, "read")
}

fn open_or_create(path: &Path, options: &OpenOptions, mode: &str) -> Result<File> {
    match options.open(path) {
        Ok(file) => Ok(file),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            ensure_exists(path)?;
            options.open(path).map_err(|err| {
                SynlogError::Filesystem(format!(
                    "Failed to open log {} for {mode} after creating it: {err}",
                    path.display()
                ))
            })
        }
        Err(err) => Err(SynlogError::Filesystem(format!(
            "Failed to open log {} for {mode}: {err}",
            path.display()
        ))),
    }
}

/// Create an empty file at `path` (and its parent directory) without
/// truncating anything another writer may have created meanwhile.
fn ensure_exists(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|err| {
            SynlogError::Filesystem(format!(
                "Failed to create log directory {}: {err}",
                parent.display()
            ))
        })?;
    }
    OpenOptions::new()
        .write(true)
        .create(true)
        .open(path)
        .map(drop)
        .map_err(|err| {
            SynlogError::Filesystem(format!(
                "Failed to create log file {}: {err}",
                path.display()
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use tempfile::TempDir;

    #[test]
    fn test_read_creates_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fresh.log");
        let mut file = open_for_read(&path).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        assert!(content.is_empty());
        assert!(path.exists());
    }

    #[test]
    fn test_append_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/deeper/app.log");
        let mut file = open_for_append(&path).unwrap();
        file.write_all(b"line\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "line\n");
    }

    #[test]
    fn test_append_preserves_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("app.log");
        std::fs::write(&path, "first\n").unwrap();
        let mut file = open_for_append(&path).unwrap();
        file.write_all(b"second\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_open_directory_for_append_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = open_for_append(temp_dir.path()).unwrap_err();
        assert!(matches!(err, SynlogError::Filesystem(_)));
    }
}
