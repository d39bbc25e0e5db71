//! Errors raised by post page operations

use thiserror::Error;

/// Failure of a post page lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// The identifier matches no post in the collection
    #[error("Post not found for id: {id}")]
    NotFound { id: String },
}

impl PageError {
    pub fn not_found(id: &str) -> Self {
        PageError::NotFound { id: id.to_string() }
    }
}
