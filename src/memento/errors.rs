use thiserror::Error;

/// Errors raised while capturing or restoring snapshots
#[derive(Error, Debug)]
pub enum MementoError {
    #[error("Snapshot is missing field '{field}'")]
    MissingField { field: String },

    #[error("Invalid value '{value}' for field '{field}': {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type MementoResult<T> = Result<T, MementoError>;

/// Helper function to create missing field errors
pub fn missing_field(field: impl Into<String>) -> MementoError {
    MementoError::MissingField {
        field: field.into(),
    }
}
