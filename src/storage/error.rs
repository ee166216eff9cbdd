use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Student not found: {0}")]
    NotFound(String),

    #[error("Invalid grade: {0}")]
    InvalidGrade(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
