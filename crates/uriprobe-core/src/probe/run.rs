//! Probe execution: version gate, URI-mode open, scratch cleanup.

use crate::probe::classify::classify_open_error;
use crate::probe::error::ProbeError;
use crate::probe::outcome::UriSupport;
use crate::scratch::ScratchDb;
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

/// URI filenames entered SQLite in 3.7.7. Older libraries treat `file:` names
/// as literal paths and would open them without complaint, so the version gate
/// decides `NotSupported` instead of trusting the open call.
const URI_MIN_VERSION_NUMBER: i32 = 3_007_007;

fn version_supports_uri(version_number: i32) -> bool {
    version_number >= URI_MIN_VERSION_NUMBER
}

/// Attempt one URI-mode open against `db_path` and classify the driver's
/// answer. Leaves whatever file the open created on disk; [`run`] is the
/// variant that guarantees cleanup.
pub fn probe_uri_support(db_path: &Path) -> Result<UriSupport, ProbeError> {
    if !version_supports_uri(rusqlite::version_number()) {
        tracing::debug!(
            version = rusqlite::version(),
            "linked library predates URI filenames"
        );
        return Ok(UriSupport::NotSupported);
    }

    let uri = format!("file:{}?mode=rwc", db_path.display());
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_CREATE
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;

    match Connection::open_with_flags(&uri, flags) {
        Ok(conn) => {
            // The open itself is the whole check; close before cleanup so the
            // scratch file is no longer held when it gets removed.
            drop(conn);
            Ok(UriSupport::Supported)
        }
        Err(err) => match classify_open_error(&err) {
            Some(outcome) => {
                tracing::debug!(error = %err, outcome = %outcome, "open attempt classified");
                Ok(outcome)
            }
            None => Err(ProbeError::Driver(err)),
        },
    }
}

/// Run the probe with scratch cleanup guaranteed on every path. With `keep_db`
/// the scratch file is left in place for inspection.
pub fn run(db_path: &Path, keep_db: bool) -> Result<UriSupport, ProbeError> {
    let scratch = ScratchDb::new(db_path, keep_db);
    let outcome = probe_uri_support(scratch.path())?;
    scratch.finish()?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_gate_boundary() {
        assert!(!version_supports_uri(3_007_006));
        assert!(version_supports_uri(3_007_007));
        assert!(version_supports_uri(3_045_000));
    }

    #[test]
    fn linked_library_passes_version_gate() {
        // The bundled driver is far past 3.7.7.
        assert!(version_supports_uri(rusqlite::version_number()));
    }
}
