//! Three-valued probe outcome and its report line.

use std::fmt;

/// What the driver said when asked to open a database through a `file:` URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriSupport {
    /// The URI-mode open succeeded.
    Supported,
    /// The linked library predates URI filenames.
    NotSupported,
    /// The open routine rejected the URI option itself.
    InvalidArgument,
}

impl UriSupport {
    /// The exact line printed on stdout. Kept verbatim from the original
    /// diagnostic so scripts that grep its output keep working.
    pub fn report_line(self) -> &'static str {
        match self {
            UriSupport::Supported => "URIs supported",
            UriSupport::NotSupported => "URIs not supported",
            UriSupport::InvalidArgument => "uri is an invalid kwarg",
        }
    }
}

impl fmt::Display for UriSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.report_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lines_are_exact() {
        assert_eq!(UriSupport::Supported.report_line(), "URIs supported");
        assert_eq!(UriSupport::NotSupported.report_line(), "URIs not supported");
        assert_eq!(
            UriSupport::InvalidArgument.report_line(),
            "uri is an invalid kwarg"
        );
    }

    #[test]
    fn display_matches_report_line() {
        assert_eq!(
            UriSupport::Supported.to_string(),
            UriSupport::Supported.report_line()
        );
    }
}
