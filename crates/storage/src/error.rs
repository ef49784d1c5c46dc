use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Nothing to export")]
    EmptyExport,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// Whether retrying the same operation can succeed. Missing entities and
    /// empty exports stay that way until the underlying data changes.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StorageError::Database(_) | StorageError::Csv(_))
    }
}
