//! Error types for DroneCover operations.
//!
//! Every fallible step sits at the boundary: configuration, radius and
//! target counts are checked once, before any optimization work starts.

use thiserror::Error;

/// Result type for DroneCover operations.
pub type Result<T> = std::result::Result<T, DroneCoverError>;

/// Errors that can occur in DroneCover operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DroneCoverError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("No coverage radius set; call set_radius before running")]
    MissingRadius,

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for DroneCoverError {
    fn from(e: std::io::Error) -> Self {
        DroneCoverError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for DroneCoverError {
    fn from(e: serde_json::Error) -> Self {
        DroneCoverError::Serialization(e.to_string())
    }
}

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{field} out of range: {value} (must be {min}-{max})")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
}

// Convenience constructors
impl DroneCoverError {
    pub fn invalid_config(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        DroneCoverError::Config(ConfigError::InvalidValue {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        })
    }

    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, value: f64) -> Self {
        DroneCoverError::Config(ConfigError::OutOfRange {
            field: field.into(),
            min,
            max,
            value,
        })
    }

    /// Whether this error came from rejected input rather than I/O.
    pub fn is_config(&self) -> bool {
        matches!(self, DroneCoverError::Config(_) | DroneCoverError::MissingRadius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_message_names_field() {
        let err = DroneCoverError::invalid_config("radius", -1.0, "must be positive");
        assert_eq!(
            err.to_string(),
            "Config error: Invalid value for radius: -1 (must be positive)"
        );
        assert!(err.is_config());
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: DroneCoverError = io.into();
        assert!(matches!(err, DroneCoverError::Io(_)));
        assert!(!err.is_config());
    }
}
