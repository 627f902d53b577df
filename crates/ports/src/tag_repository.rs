//! Tag Repository Port
//!
//! Defines the interface for tag resolution and persistence.

use async_trait::async_trait;
use genie_core::Tag;

/// Tag repository port
///
/// Tag text is unique across the store: `resolve_or_create` returns the same
/// record for equal values no matter how many callers race on it, and the
/// text of a stored record never changes.
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Look up the record for `value`, creating it on first reference.
    async fn resolve_or_create(&self, value: &str) -> Result<Tag, TagRepositoryError>;

    /// Look up the record for `value` without creating it.
    async fn find(&self, value: &str) -> Result<Option<Tag>, TagRepositoryError>;
}

/// Tag repository error
#[derive(thiserror::Error, Debug)]
pub enum TagRepositoryError {
    #[error("Invalid tag value: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_tag_repository_is_object_safe() {
        let _repo: Option<Box<dyn TagRepository>> = None;
    }

    #[test]
    fn test_tag_repository_error_display() {
        let validation = TagRepositoryError::Validation("blank".to_string());
        let database = TagRepositoryError::Database("connection lost".to_string());

        assert!(validation.to_string().contains("Invalid tag value"));
        assert!(database.to_string().contains("Database error"));
    }
}
