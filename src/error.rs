//! Error types for geocap

use std::io;

/// Result type for geocap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in geocap operations
///
/// Empty input and the absence of a feasible circle are not errors: the
/// solver reports both as `Ok(None)`. Degenerate candidate geometry is
/// recovered inside the solver and never reaches the caller.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Latitude outside [-90, 90] or longitude outside [-180, 180]
    #[error("Invalid coordinate: lat={lat}, lng={lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },

    /// Hull exceeds the configured brute-force bound
    #[error("Hull too large: {size} vertices exceeds limit of {limit}")]
    HullTooLarge { size: usize, limit: usize },

    /// Malformed point list
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns true when the error was caused by caller-supplied data
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidCoordinate { .. }
                | Error::HullTooLarge { .. }
                | Error::Csv(_)
                | Error::Config(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Config("bad value".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad value");
        assert!(err.is_client_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_invalid_coordinate() {
        let err = Error::InvalidCoordinate { lat: 91.0, lng: 0.0 };
        assert!(err.to_string().contains("lat=91"));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_hull_too_large() {
        let err = Error::HullTooLarge { size: 300, limit: 128 };
        assert!(err.to_string().contains("300"));
        assert!(err.to_string().contains("128"));
    }
}
