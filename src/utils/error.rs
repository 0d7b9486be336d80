use thiserror::Error;

#[derive(Error, Debug)]
pub enum AirAwareError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status} for {endpoint}")]
    ApiStatus { status: u16, endpoint: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid reading for {location}: {reason}")]
    InvalidReading { location: String, reason: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Data,
    Storage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AirAwareError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AirAwareError::ApiError(_) | AirAwareError::ApiStatus { .. } => ErrorCategory::Network,
            AirAwareError::ConfigError { .. }
            | AirAwareError::InvalidConfigValueError { .. }
            | AirAwareError::MissingConfigError { .. } => ErrorCategory::Configuration,
            AirAwareError::CsvError(_)
            | AirAwareError::SerializationError(_)
            | AirAwareError::InvalidReading { .. }
            | AirAwareError::ProcessingError { .. } => ErrorCategory::Data,
            AirAwareError::ZipError(_) | AirAwareError::IoError(_) => ErrorCategory::Storage,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 單筆讀數無效不影響整份報告
            AirAwareError::InvalidReading { .. } => ErrorSeverity::Low,
            AirAwareError::ApiError(_) | AirAwareError::ApiStatus { .. } => ErrorSeverity::Medium,
            AirAwareError::ConfigError { .. }
            | AirAwareError::InvalidConfigValueError { .. }
            | AirAwareError::MissingConfigError { .. }
            | AirAwareError::CsvError(_)
            | AirAwareError::SerializationError(_)
            | AirAwareError::ProcessingError { .. } => ErrorSeverity::High,
            AirAwareError::ZipError(_) | AirAwareError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AirAwareError::ApiStatus { status: 401, .. } => {
                "Check that the OpenWeather API key is valid and activated".to_string()
            }
            AirAwareError::ApiStatus { status: 429, .. } => {
                "The API rate limit was reached, wait a minute and retry".to_string()
            }
            AirAwareError::ApiError(_) | AirAwareError::ApiStatus { .. } => {
                "Check network connectivity and the --base-url setting, then retry".to_string()
            }
            AirAwareError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            AirAwareError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and run again", field)
            }
            AirAwareError::ConfigError { .. } => {
                "Review the configuration file for syntax errors".to_string()
            }
            AirAwareError::InvalidReading { .. } => {
                "The provider returned out-of-range data, try again later".to_string()
            }
            AirAwareError::IoError(_) | AirAwareError::ZipError(_) => {
                "Check that the output path exists and is writable".to_string()
            }
            AirAwareError::CsvError(_)
            | AirAwareError::SerializationError(_)
            | AirAwareError::ProcessingError { .. } => {
                "Run again with --verbose and report the log output".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not fetch air quality data: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Data => format!("Could not process air quality data: {}", self),
            ErrorCategory::Storage => format!("Could not write the report: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, AirAwareError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_status_is_network_medium() {
        let err = AirAwareError::ApiStatus {
            status: 401,
            endpoint: "air_pollution".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.recovery_suggestion().contains("API key"));
        assert!(err.to_string().contains("401"));
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = AirAwareError::MissingConfigError {
            field: "api_key".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().starts_with("Configuration problem"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: AirAwareError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.category(), ErrorCategory::Storage);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
