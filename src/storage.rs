use std::fs;
use std::path::PathBuf;

use alert_core::SnapshotStore;

/// JSON-file snapshot port. The whole contact list is rewritten on every
/// mutation; a missing or unreadable file reads as "no snapshot" and the
/// store falls back to its seed list.
pub struct FileSnapshot {
    path: PathBuf,
}

impl FileSnapshot {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SnapshotStore for FileSnapshot {
    fn read(&self) -> Option<String> {
        fs::read_to_string(&self.path).ok()
    }

    fn write(&mut self, snapshot: &str) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }
        fs::write(&self.path, snapshot).map_err(|e| e.to_string())
    }
}
