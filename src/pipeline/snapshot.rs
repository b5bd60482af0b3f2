//! Raw JSON snapshots on disk

use serde_json::Value;
use std::{
    fs,
    io::{self, Write},
    path::Path,
};

/// What happened to a snapshot file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotOutcome {
    Written,
    /// The file was already there and was left as is.
    Kept,
}

/// Write `value` as pretty JSON, replacing any existing file.
pub fn write_snapshot(path: &Path, value: &Value) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(value)?;
    let mut f = fs::File::create(path)?;
    f.write_all(json.as_bytes())
}

/// Write `value` only if `path` does not exist yet.
pub fn write_snapshot_if_absent(path: &Path, value: &Value) -> io::Result<SnapshotOutcome> {
    if path.is_file() {
        return Ok(SnapshotOutcome::Kept);
    }

    write_snapshot(path, value)?;
    Ok(SnapshotOutcome::Written)
}
