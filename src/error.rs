//! Error types and handling for `WeatherWear`

use thiserror::Error;

/// Main error type for the `WeatherWear` core
#[derive(Error, Debug)]
pub enum WeatherWearError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Coordinates or other input that failed validation
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Reading from durable storage failed
    #[error("Storage read error: {message}")]
    StorageRead { message: String },

    /// Writing to durable storage failed
    #[error("Storage write error: {message}")]
    StorageWrite { message: String },

    /// Reverse geocoding failed
    #[error("Geocoding error: {message}")]
    Geocode { message: String },

    /// Forecast service failed
    #[error("Forecast error: {message}")]
    Forecast { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl WeatherWearError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new storage read error
    pub fn storage_read<S: Into<String>>(message: S) -> Self {
        Self::StorageRead {
            message: message.into(),
        }
    }

    /// Create a new storage write error
    pub fn storage_write<S: Into<String>>(message: S) -> Self {
        Self::StorageWrite {
            message: message.into(),
        }
    }

    /// Create a new geocoding error
    pub fn geocode<S: Into<String>>(message: S) -> Self {
        Self::Geocode {
            message: message.into(),
        }
    }

    /// Create a new forecast error
    pub fn forecast<S: Into<String>>(message: S) -> Self {
        Self::Forecast {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WeatherWearError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            WeatherWearError::Validation { message } => format!("Invalid input: {message}"),
            WeatherWearError::StorageRead { .. } => {
                "Saved locations could not be read. Starting with no saved pins.".to_string()
            }
            WeatherWearError::StorageWrite { .. } => {
                "Your change could not be saved and will be lost when the app closes.".to_string()
            }
            WeatherWearError::Geocode { .. } => "Place name unavailable.".to_string(),
            WeatherWearError::Forecast { .. } => {
                "Unable to load the forecast. Please check your internet connection.".to_string()
            }
            WeatherWearError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = WeatherWearError::config("missing storage location");
        assert!(matches!(config_err, WeatherWearError::Config { .. }));

        let write_err = WeatherWearError::storage_write("disk full");
        assert!(matches!(write_err, WeatherWearError::StorageWrite { .. }));

        let validation_err = WeatherWearError::validation("latitude out of range");
        assert!(matches!(validation_err, WeatherWearError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let write_err = WeatherWearError::storage_write("test");
        assert!(write_err.user_message().contains("could not be saved"));

        let geocode_err = WeatherWearError::geocode("timeout");
        assert_eq!(geocode_err.user_message(), "Place name unavailable.");

        let validation_err = WeatherWearError::validation("bad latitude");
        assert!(validation_err.user_message().contains("bad latitude"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: WeatherWearError = io_err.into();
        assert!(matches!(err, WeatherWearError::Io { .. }));
    }
}
