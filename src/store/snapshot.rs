//! JSON snapshot file backing a [`CounterStore`](crate::store::CounterStore).
//!
//! The whole table set is rewritten after every committed mutation: the new
//! contents go to `<file>.tmp`, are flushed to disk, and are then renamed over
//! the old file, so neither a reader nor a crash leaves a half-written snapshot.
//! A sibling `<file>.lock` holds an exclusive advisory lock for as long as the
//! [`SnapshotFile`] lives.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::store::error::StoreError;
use crate::store::schema::{CounterRow, GroupRow};

/// Serialized table contents plus identity counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub groups: Vec<GroupRow>,
    #[serde(default)]
    pub counters: Vec<CounterRow>,
    /// Last issued group id.
    #[serde(default)]
    pub last_group_id: i64,
    /// Last issued counter id.
    #[serde(default)]
    pub last_counter_id: i64,
}

pub struct SnapshotFile {
    path: PathBuf,
    lock: File,
}

impl SnapshotFile {
    /// Open (without reading) the snapshot at `path`, taking its lock.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::SnapshotWrite {
                path: path.clone(),
                source: e,
            })?;
        }

        let lock_path = sibling(&path, ".lock");
        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|e| StoreError::SnapshotWrite {
                path: lock_path.clone(),
                source: e,
            })?;
        FileExt::try_lock_exclusive(&lock).map_err(|_| StoreError::Locked { path: path.clone() })?;

        tracing::debug!(path = %path.display(), "Snapshot file locked");
        Ok(Self { path, lock })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot. `None` when the file does not exist yet.
    pub fn load(&self) -> Result<Option<Snapshot>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&self.path).map_err(|e| StoreError::SnapshotRead {
            path: self.path.clone(),
            source: e,
        })?;
        let snapshot = serde_json::from_slice(&bytes).map_err(|e| StoreError::SnapshotParse {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(Some(snapshot))
    }

    pub fn write(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let write_err = |source| StoreError::SnapshotWrite {
            path: self.path.clone(),
            source,
        };
        let bytes = serde_json::to_vec_pretty(snapshot)
            .map_err(|e| write_err(std::io::Error::other(e)))?;
        let tmp = sibling(&self.path, ".tmp");
        write_synced(&tmp, &bytes).map_err(write_err)?;
        fs::rename(&tmp, &self.path).map_err(write_err)?;
        Ok(())
    }
}

impl Drop for SnapshotFile {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.lock);
    }
}

/// Contents must be on disk before the rename makes them visible.
fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}
