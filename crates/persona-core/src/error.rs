use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("response value {value} for item '{item_id}' is outside the scale [{min}, {max}]")]
    ValueOutOfScale {
        item_id: String,
        value: i32,
        min: i32,
        max: i32,
    },
}
