//! Tag entity
//!
//! A deduplicated text label attachable to applications, clusters, commands
//! and jobs for search and filtering. Equality and hashing are by tag text;
//! the text is immutable once the record exists.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EnvironmentError;
use crate::Result;

/// Maximum length of a tag value, in characters.
pub const MAX_TAG_LENGTH: usize = 255;

/// A single tag record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    id: Uuid,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
    tag: String,
}

impl Tag {
    /// Create a new tag record with a fresh identifier and audit timestamps.
    ///
    /// # Errors
    /// Returns `EnvironmentError::Validation` if the value is blank or longer
    /// than [`MAX_TAG_LENGTH`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(EnvironmentError::Validation(
                "tag value cannot be blank".to_string(),
            ));
        }
        if value.chars().count() > MAX_TAG_LENGTH {
            return Err(EnvironmentError::Validation(format!(
                "tag value exceeds {MAX_TAG_LENGTH} characters"
            )));
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            created: now,
            updated: now,
            tag: value,
        })
    }

    /// Persistent identifier of this record
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Creation timestamp
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Last-update timestamp
    pub fn updated(&self) -> DateTime<Utc> {
        self.updated
    }

    /// The tag text
    pub fn value(&self) -> &str {
        &self.tag
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag.hash(state);
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_length_bounds() {
        assert!(Tag::new("a".repeat(MAX_TAG_LENGTH)).is_ok());

        let err = Tag::new("a".repeat(MAX_TAG_LENGTH + 1)).unwrap_err();
        assert!(matches!(err, EnvironmentError::Validation(_)));
    }

    #[test]
    fn test_blank_tag_is_rejected() {
        assert!(Tag::new("").is_err());
        assert!(Tag::new("   ").is_err());
    }

    #[test]
    fn test_equality_is_by_tag_text() {
        let first = Tag::new("sched:sla").unwrap();
        let second = Tag::new("sched:sla").unwrap();

        assert_eq!(first, second);
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn test_audit_fields_are_set_on_creation() {
        let tag = Tag::new("type:yarn").unwrap();
        assert_eq!(tag.created(), tag.updated());
        assert_eq!(tag.value(), "type:yarn");
    }
}
