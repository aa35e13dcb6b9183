//! Error adapter for converting ConstellationError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use constellation::ConstellationError;

/// Adapter that renders a [`ConstellationError`] through miette.
///
/// Constellation errors carry no source spans (parsing never fails), so the
/// adapter only contributes an error code and, where useful, a hint.
pub struct ErrorAdapter<'a>(pub &'a ConstellationError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            ConstellationError::Io(_) => "constellation::io",
            ConstellationError::Config(_) => "constellation::config",
            ConstellationError::Export(_) => "constellation::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            ConstellationError::Config(_) => {
                "colors accept CSS syntax and link_shape is one of straight, arrow, curved"
            }
            ConstellationError::Export(_) => "check background_color in the [style] section",
            ConstellationError::Io(_) => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
