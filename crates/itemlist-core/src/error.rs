use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ItemListError {
    /// Carries the title exactly as the caller supplied it so the
    /// confirmation prompt can echo it back.
    #[error("\"{title}\" already exists in your list")]
    DuplicateTitle { title: String },

    #[error("Item not found: {0}")]
    NotFound(Uuid),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
