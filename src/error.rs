use thiserror::Error;

pub type Result<T> = std::result::Result<T, TodoError>;

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("Todo list not found: {0}")]
    ListNotFound(String),

    #[error("A todo list titled '{0}' already exists")]
    DuplicateTitle(String),

    #[error("Todo list title must not be empty")]
    EmptyTitle,

    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
