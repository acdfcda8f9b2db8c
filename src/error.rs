use thiserror::Error;

pub type Result<T> = std::result::Result<T, GitinkError>;

#[derive(Error, Debug)]
pub enum GitinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Git error: {0}")]
    Git(String),
    #[error("Parse error: {0}")]
    Parse(String),
}
