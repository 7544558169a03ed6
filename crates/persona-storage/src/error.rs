use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("session not found: {instrument_id}/{id}")]
    SessionNotFound { instrument_id: String, id: Uuid },

    #[error("report not found: {instrument_id}/{id}")]
    ReportNotFound { instrument_id: String, id: Uuid },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("S3 GetObject error: {0}")]
    GetObject(String),

    #[error("S3 PutObject error: {0}")]
    PutObject(String),

    #[error("S3 DeleteObject error: {0}")]
    DeleteObject(String),

    #[error("S3 ListObjects error: {0}")]
    ListObjects(String),

    #[error("storage config error: {0}")]
    Config(String),
}
