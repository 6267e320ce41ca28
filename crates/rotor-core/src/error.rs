use thiserror::Error;

pub type Result<T> = std::result::Result<T, RotorError>;

#[derive(Debug, Error)]
pub enum RotorError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("state format error: {0}")]
    StateFormat(String),

    #[error("diagnostic error: {0}")]
    Diagnostic(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
