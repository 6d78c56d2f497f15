//! Atomic file writes for scaffold.
//!
//! The catalog and config are rewritten as whole files. Each write goes to a
//! temporary sibling (`.{filename}.tmp`), is synced, then renamed over the
//! target, so a crash never leaves a half-written catalog behind.
//!
//! Source and destination share a directory, so the rename stays on one
//! filesystem.

use crate::error::{Result, ScaffoldError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write a string to a file, creating parent directories.
///
/// # Returns
///
/// * `Ok(())` - On successful atomic write
/// * `Err(ScaffoldError::UserError)` - On write or rename failure
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            ScaffoldError::UserError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content.as_bytes())?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ScaffoldError::UserError(format!(
            "failed to atomically replace '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Temporary file path in the same directory as the target.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            ScaffoldError::UserError(format!("invalid file path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        ScaffoldError::UserError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            ScaffoldError::UserError(format!("failed to write temporary file: {}", e))
        })
}
