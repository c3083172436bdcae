//! Classify driver open errors into probe outcomes.

use crate::probe::outcome::UriSupport;
use rusqlite::ErrorCode;

/// Classify an error from the URI-mode open attempt.
///
/// `SQLITE_MISUSE` means the open routine refused the flag set, i.e. it does
/// not recognize the URI option at all. Anything else is not an anticipated
/// driver answer and returns `None` so the caller can propagate it.
pub fn classify_open_error(err: &rusqlite::Error) -> Option<UriSupport> {
    match err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ApiMisuse => {
            Some(UriSupport::InvalidArgument)
        }
        _ => None,
    }
}
