//! Error types for Constellation operations.
//!
//! Composition itself never fails: malformed trees degrade to no-ops. Errors
//! come from the surfaces around it, such as invalid configuration values,
//! file I/O and SVG export.

use std::io;

use thiserror::Error;

/// The main error type for Constellation operations.
#[derive(Debug, Error)]
pub enum ConstellationError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for ConstellationError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ConstellationError::Config("bad color".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad color");

        let err: ConstellationError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, ConstellationError::Io(_)));
    }

    #[test]
    fn test_from_export_error() {
        let err: ConstellationError = crate::export::Error::InvalidColor("nope".to_string()).into();
        assert!(err.to_string().starts_with("Export error: "));
    }
}
