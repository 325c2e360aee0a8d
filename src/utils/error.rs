use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("Invalid color format: '{value}' (expected 6 hex digits, e.g. #23364a)")]
    InvalidColorFormat { value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Packaging error: {message}")]
    PackagingError { message: String },

    #[error("Processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Processing,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ThemeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ThemeError::InvalidColorFormat { .. } => ErrorCategory::Input,
            ThemeError::ConfigValidationError { .. }
            | ThemeError::InvalidConfigValueError { .. }
            | ThemeError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ThemeError::SerializationError(_)
            | ThemeError::CsvError(_)
            | ThemeError::PackagingError { .. }
            | ThemeError::ProcessingError { .. } => ErrorCategory::Processing,
            ThemeError::IoError(_) | ThemeError::ZipError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ThemeError::InvalidColorFormat { .. }
            | ThemeError::ConfigValidationError { .. }
            | ThemeError::InvalidConfigValueError { .. }
            | ThemeError::MissingConfigError { .. }
            | ThemeError::PackagingError { .. }
            | ThemeError::ProcessingError { .. }
            | ThemeError::SerializationError(_)
            | ThemeError::CsvError(_) => ErrorSeverity::High,
            ThemeError::IoError(_) | ThemeError::ZipError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ThemeError::InvalidColorFormat { .. } => {
                "Check the palette for typos; colors must be 6 hex digits with an optional '#' prefix"
                    .to_string()
            }
            ThemeError::ConfigValidationError { field, .. }
            | ThemeError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' entry in the configuration file", field)
            }
            ThemeError::MissingConfigError { field } => {
                format!("Add the required '{}' entry to the configuration file", field)
            }
            ThemeError::PackagingError { .. } => {
                "Make sure the extension directory contains package.json, the contributed theme files and README.md"
                    .to_string()
            }
            ThemeError::SerializationError(_) => {
                "Verify that the JSON files are well-formed".to_string()
            }
            ThemeError::IoError(_) => {
                "Check file permissions and that the output directory is writable".to_string()
            }
            ThemeError::ZipError(_) => {
                "Retry the packaging step; the archive could not be written".to_string()
            }
            ThemeError::CsvError(_) | ThemeError::ProcessingError { .. } => {
                "Re-run with --verbose for details".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ThemeError::InvalidColorFormat { value } => {
                format!("'{}' is not a valid hex color", value)
            }
            ThemeError::MissingConfigError { field } => {
                format!("The configuration is missing '{}'", field)
            }
            ThemeError::PackagingError { message } => {
                format!("The theme package is not ready: {}", message)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ThemeError>;
