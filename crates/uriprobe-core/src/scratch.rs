//! Scratch database lifecycle.
//!
//! The URI-mode open creates a real database file as a side effect. This
//! guard owns that path and removes the file when the probe is done, on
//! success and on early error return alike.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// RAII guard for the scratch database file.
///
/// `finish` is the normal exit: it removes the file and surfaces I/O errors.
/// Drop is the backstop for early returns; there a removal failure is only
/// logged.
pub struct ScratchDb {
    path: PathBuf,
    armed: bool,
}

impl ScratchDb {
    /// Guard `path`. With `keep` the guard is disarmed and the file survives.
    pub fn new(path: &Path, keep: bool) -> Self {
        ScratchDb {
            path: path.to_path_buf(),
            armed: !keep,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the scratch file (if armed) and consume the guard.
    pub fn finish(mut self) -> io::Result<()> {
        if !self.armed {
            return Ok(());
        }
        self.armed = false;
        remove_if_exists(&self.path)
    }
}

impl Drop for ScratchDb {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Err(err) = remove_if_exists(&self.path) {
            tracing::warn!(
                path = %self.path.display(),
                error = %err,
                "failed to remove scratch database"
            );
        }
    }
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn finish_removes_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.sqlite3");
        fs::write(&path, b"x").unwrap();

        let guard = ScratchDb::new(&path, false);
        guard.finish().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn finish_tolerates_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.sqlite3");

        let guard = ScratchDb::new(&path, false);
        guard.finish().unwrap();
    }

    #[test]
    fn drop_removes_file_on_early_return() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.sqlite3");
        fs::write(&path, b"x").unwrap();

        {
            let _guard = ScratchDb::new(&path, false);
        }
        assert!(!path.exists());
    }

    #[test]
    fn keep_disarms_the_guard() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.sqlite3");
        fs::write(&path, b"x").unwrap();

        let guard = ScratchDb::new(&path, true);
        guard.finish().unwrap();
        assert!(path.exists());
    }
}
