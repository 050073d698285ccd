// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use std::fs;
use std::io;
use std::path::Path;

/// Verifies that `path` can be created.
///
/// - file does not exist → Ok
/// - file exists and `force` → Ok (it will be overwritten)
/// - file exists without `force` → error
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    Err(AppError::from(io::Error::new(
        io::ErrorKind::AlreadyExists,
        format!(
            "The file '{}' already exists (use --force to overwrite)",
            path.display()
        ),
    )))
}

/// Write `bytes` to `path`, creating the parent directory.
pub(crate) fn write_file(path: &Path, bytes: &[u8], force: bool) -> AppResult<()> {
    ensure_writable(path, force)?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    Ok(())
}
