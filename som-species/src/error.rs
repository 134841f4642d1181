/// Error types for loading the species and observation tables
use thiserror::Error;

/// Failure to turn a tabular source into typed records.
///
/// Every variant is fatal for the load: no partial dataset is produced.
#[derive(Error, Debug)]
pub enum DataSourceError {
    /// The source file does not exist
    #[error("data source '{0}' not found")]
    Missing(String),

    /// The source exists but could not be read
    #[error("data source '{name}' could not be read: {reason}")]
    Unreadable { name: String, reason: String },

    /// A required column is absent from the header row
    #[error("data source '{source_name}' is missing required column '{column}'")]
    MissingColumn { source_name: String, column: String },

    /// The CSV reader rejected the input
    #[error("failed to parse CSV in '{source_name}': {error}")]
    Csv {
        source_name: String,
        #[source]
        error: csv::Error,
    },

    /// A row failed its required-field checks under the strict row policy
    #[error("malformed row {line} in '{source_name}': {reason}")]
    MalformedRow {
        source_name: String,
        line: u64,
        reason: String,
    },

    /// Building the in-memory store failed
    #[error("failed to build in-memory store: {0}")]
    Store(String),
}

impl DataSourceError {
    pub(crate) fn csv(source_name: &str, error: csv::Error) -> Self {
        DataSourceError::Csv {
            source_name: source_name.to_string(),
            error,
        }
    }
}

/// Type alias for Results using DataSourceError
pub type Result<T> = std::result::Result<T, DataSourceError>;
