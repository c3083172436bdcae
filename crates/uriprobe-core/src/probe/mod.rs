//! URI-capability probe.
//!
//! This module encapsulates the single check the tool performs: attempt one
//! URI-mode open against a scratch database and classify the driver's answer
//! into a three-valued outcome, so the CLI only has to print one line.

mod classify;
mod error;
mod outcome;
mod run;

pub use classify::classify_open_error;
pub use error::ProbeError;
pub use outcome::UriSupport;
pub use run::{probe_uri_support, run};
