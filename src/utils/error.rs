use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Order references column {index}, but the request has {columns} column(s)")]
    InvalidOrderColumn { index: usize, columns: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported input file: {path}")]
    UnsupportedInput { path: String },
}

impl SearchError {
    /// True when the error stems from a malformed request rather than the environment.
    pub fn is_request_error(&self) -> bool {
        matches!(self, SearchError::InvalidOrderColumn { .. })
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SearchError::InvalidOrderColumn { .. } => {
                "Check that order[].column indexes into the columns array"
            }
            SearchError::IoError(_) => "Check that the file exists and is readable",
            SearchError::SerializationError(_) => "Check that the input is valid JSON",
            SearchError::CsvError(_) => "Check that the CSV has a header row and consistent rows",
            SearchError::ConfigValidationError { .. }
            | SearchError::InvalidConfigValueError { .. } => {
                "Review the configuration file against the documented keys"
            }
            SearchError::UnsupportedInput { .. } => "Use a .json or .csv records file",
        }
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
