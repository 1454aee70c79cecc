use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} Not found")]
    NotFound(String),

    #[error("Contact '{0}' already exist, use --overwrite to replace it")]
    AlreadyExists(String),

    #[error("Storage file is corrupt: {0}")]
    StorageCorrupt(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        // Serde only reports Io for failures of the underlying reader/writer
        if err.is_io() {
            AppError::Io(err.into())
        } else {
            AppError::StorageCorrupt(err.to_string())
        }
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            match err.into_kind() {
                csv::ErrorKind::Io(e) => AppError::Io(e),
                other => AppError::StorageCorrupt(format!("{:?}", other)),
            }
        } else {
            AppError::StorageCorrupt(err.to_string())
        }
    }
}

impl From<tempfile::PersistError> for AppError {
    fn from(err: tempfile::PersistError) -> Self {
        AppError::Io(err.error)
    }
}
