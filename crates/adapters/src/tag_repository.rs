//! In-Memory Tag Repository
//!
//! Map-backed implementation of the tag repository port for tests and
//! single-node deployments. Tag text is the map key, so uniqueness holds by
//! construction; the write lock spans the whole check-insert step, so
//! concurrent callers resolving equal text observe a single record.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use genie_core::{EnvironmentError, Tag};
use genie_ports::{TagRepository, TagRepositoryError};

/// In-memory tag repository
#[derive(Clone)]
pub struct InMemoryTagRepository {
    tags: Arc<RwLock<HashMap<String, Tag>>>,
}

impl InMemoryTagRepository {
    pub fn new() -> Self {
        Self {
            tags: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryTagRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TagRepository for InMemoryTagRepository {
    async fn resolve_or_create(&self, value: &str) -> Result<Tag, TagRepositoryError> {
        // Validate (and mint the candidate record) before taking the lock.
        let candidate = Tag::new(value).map_err(|e| match e {
            EnvironmentError::Validation(msg) => TagRepositoryError::Validation(msg),
            other => TagRepositoryError::Database(other.to_string()),
        })?;

        let mut tags = self.tags.write().await;
        if let Some(existing) = tags.get(value) {
            return Ok(existing.clone());
        }

        debug!(tag = value, "Creating tag");
        tags.insert(value.to_string(), candidate.clone());
        Ok(candidate)
    }

    async fn find(&self, value: &str) -> Result<Option<Tag>, TagRepositoryError> {
        let tags = self.tags.read().await;
        Ok(tags.get(value).cloned())
    }
}
