use thiserror::Error;

/// Errors that can occur while persisting or loading datasets.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be read or written.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON Lines record could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An unknown output format name was requested.
    #[error("unknown dataset format: {0:?}")]
    UnknownFormat(String),
}

/// Result type alias for dataset operations.
pub type Result<T> = std::result::Result<T, DatasetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = DatasetError::UnknownFormat("parquet".into());
        assert_eq!(err.to_string(), "unknown dataset format: \"parquet\"");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DatasetError>();
    }
}
