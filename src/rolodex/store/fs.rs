use super::{Snapshot, SnapshotStore};
use crate::error::StorageError;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use uuid::Uuid;

pub const DEFAULT_DATA_FILE: &str = "contacts.json";

/// Stores the snapshot as a single JSON file at a fixed path.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A store for `file_name` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>, file_name: &str) -> Self {
        Self::new(dir.as_ref().join(file_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<(), StorageError> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(|e| StorageError::io(path, e))?;
        }
        Ok(())
    }

    fn temp_path(&self, dir: &Path) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());
        dir.join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()))
    }
}

/// Writes `content` and flushes it to disk before returning.
fn write_synced(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}

impl SnapshotStore for FileStore {
    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn load(&self) -> Result<Snapshot, StorageError> {
        if !self.path.exists() {
            return Err(StorageError::Missing(self.path.clone()));
        }

        let content = fs::read_to_string(&self.path).map_err(|e| StorageError::io(&self.path, e))?;
        let snapshot = Snapshot::from_json(&content)?;
        debug!(
            path = %self.path.display(),
            contacts = snapshot.contacts.len(),
            "Loaded snapshot"
        );
        Ok(snapshot)
    }

    fn save(&mut self, snapshot: &Snapshot) -> Result<(), StorageError> {
        let dir = self.parent_dir();
        self.ensure_dir(&dir)?;

        let content = snapshot.to_json()?;
        let tmp_file = self.temp_path(&dir);

        if let Err(e) = write_synced(&tmp_file, content.as_bytes()) {
            warn!(path = %tmp_file.display(), error = %e, "Write failed, cleaning up temp file");
            let _ = fs::remove_file(&tmp_file);
            return Err(StorageError::io(&tmp_file, e));
        }
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            warn!(path = %tmp_file.display(), error = %e, "Rename failed, cleaning up temp file");
            let _ = fs::remove_file(&tmp_file);
            return Err(StorageError::io(&self.path, e));
        }

        info!(
            path = %self.path.display(),
            contacts = snapshot.contacts.len(),
            "Saved snapshot"
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
