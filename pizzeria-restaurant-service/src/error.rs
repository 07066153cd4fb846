#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Record not found")]
    NotFound,
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Failed to connect to database: {0}")]
    Connection(#[from] diesel::ConnectionError),
    #[error("Database error: {0}")]
    Database(diesel::result::Error),
    #[error("Failed to run migrations: {0}")]
    Migration(String),
}

impl From<diesel::result::Error> for StoreError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => StoreError::NotFound,
            err => StoreError::Database(err),
        }
    }
}
