use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkingCapitalError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Model fit failure: {0}")]
    ModelFit(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for WorkingCapitalError {
    fn from(e: serde_json::Error) -> Self {
        WorkingCapitalError::SerializationError(e.to_string())
    }
}
