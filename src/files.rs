//! Guarded file reads and JSON writes.
use crate::paths;
use anyhow::{anyhow, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Read a file's full contents as UTF-8 text.
///
/// The existence check runs before the read so a missing file reports
/// the fixed message rather than a raw I/O error; failures during the
/// read itself propagate unmodified.
pub fn read_text(path: &Path) -> Result<String> {
    if !paths::exists(path) {
        return Err(anyhow!("File does not exist").context(format!("read {}", path.display())));
    }
    let text = fs::read_to_string(path)?;
    Ok(text)
}

/// Serialize `value` as pretty-printed JSON and persist it to `path`.
///
/// Overwrite protection is unconditional: an existing file fails the
/// write and the underlying write primitive never runs. I/O failures
/// during the write propagate unmodified.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if paths::exists(path) {
        return Err(anyhow!("File already exists").context(format!("write {}", path.display())));
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}
