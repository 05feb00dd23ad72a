use thiserror::Error;

/// Errors at the crate's file and configuration boundary. The pricing
/// engine itself is total: page-range text and job contents never
/// produce an error, only the surrounding I/O and config plumbing does.
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid config value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required config field: {field}")]
    MissingConfigError { field: String },

    #[error("Processing error: {message}")]
    ProcessingError { message: String },
}

impl QuoteError {
    /// One-line message suitable for end users on the CLI.
    pub fn user_friendly_message(&self) -> String {
        match self {
            QuoteError::IoError(e) => format!("Could not read or write a file: {}", e),
            QuoteError::SerializationError(e) => {
                format!("Cart file is not valid JSON: {}", e)
            }
            QuoteError::CsvError(e) => format!("Could not build the quote CSV: {}", e),
            QuoteError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem in '{}': {}", field, reason)
            }
            QuoteError::MissingConfigError { field } => {
                format!("Missing configuration: {}", field)
            }
            QuoteError::ProcessingError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            QuoteError::IoError(_) => "Check that the cart file exists and the output directory is writable",
            QuoteError::SerializationError(_) => "Check the cart file against the expected job fields",
            QuoteError::CsvError(_) | QuoteError::ProcessingError { .. } => {
                "Re-run with --verbose for details"
            }
            QuoteError::InvalidConfigValueError { .. } | QuoteError::MissingConfigError { .. } => {
                "Fix the pricing/config file and try again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;
