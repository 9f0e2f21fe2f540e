//! Custom error types for taxcost
//!
//! The calculator itself never fails: bad amount text is replaced by zero.
//! These errors cover the ambient surfaces around it (configuration, the
//! terminal, log files and locale overrides).

use thiserror::Error;

/// The main error type for taxcost operations
#[derive(Error, Debug)]
pub enum TaxCostError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// A locale tag that could not be understood
    #[error("Unsupported locale: {0}")]
    Locale(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl From<std::io::Error> for TaxCostError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for taxcost operations
pub type TaxCostResult<T> = Result<T, TaxCostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TaxCostError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_locale_error_display() {
        let err = TaxCostError::Locale("xx_YY".into());
        assert_eq!(err.to_string(), "Unsupported locale: xx_YY");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TaxCostError = io_err.into();
        assert!(matches!(err, TaxCostError::Io(_)));
    }
}
