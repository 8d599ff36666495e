//! Base-directory resolution and existence probing.
//!
//! Relative paths resolve against a fixed base directory, never the
//! process working directory.
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory relative paths resolve against when none is configured:
/// the directory containing the running executable.
pub fn default_base_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("locate current executable")?;
    let dir = exe
        .parent()
        .ok_or_else(|| anyhow!("executable path has no parent directory"))?;
    Ok(dir.to_path_buf())
}

/// Join `path` onto `base` unless it is already absolute.
pub fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Report whether a filesystem entry exists at `path`.
///
/// Every probe failure collapses to `false` here at the boundary; the
/// underlying error kind is logged first so permission problems stay
/// inspectable without changing the contract.
pub fn exists(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(_) => true,
        Err(err) => {
            tracing::debug!(
                path = %path.display(),
                kind = ?err.kind(),
                "existence probe failed"
            );
            false
        }
    }
}
