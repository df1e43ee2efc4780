//! Repository traits describing persistence adapters.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{PostRecord, SessionRecord, UserId};

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("duplicate record violates unique constraint `{constraint}`")]
    Duplicate { constraint: String },
    #[error("resource not found")]
    NotFound,
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("integrity error: {message}")]
    Integrity { message: String },
    #[error("database timeout")]
    Timeout,
}

impl RepoError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}

/// Content update keyed by `slug`; the slug itself is not rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePostParams {
    pub slug: String,
    pub title: String,
    pub markdown: String,
}

#[async_trait]
pub trait PostsRepo: Send + Sync {
    /// Post with `slug` owned by `user_id`, if any.
    async fn find_for_owner(
        &self,
        user_id: UserId,
        slug: &str,
    ) -> Result<Option<PostRecord>, RepoError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<PostRecord>, RepoError>;
}

#[async_trait]
pub trait PostsWriteRepo: Send + Sync {
    /// Returns [`RepoError::NotFound`] when no post has the given slug.
    async fn update_post(&self, params: UpdatePostParams) -> Result<(), RepoError>;
}

#[async_trait]
pub trait SessionsRepo: Send + Sync {
    async fn find_session(&self, token_hash: &[u8]) -> Result<Option<SessionRecord>, RepoError>;
}

#[async_trait]
pub trait HealthRepo: Send + Sync {
    /// Succeeds when the backing store answers a trivial query.
    async fn ping(&self) -> Result<(), RepoError>;
}
