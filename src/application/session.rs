use std::sync::Arc;

use metrics::counter;
use sha2::{Digest, Sha256};
use thiserror::Error;
use time::OffsetDateTime;
use tracing::debug;

use crate::application::repos::{RepoError, SessionsRepo};
use crate::domain::entities::UserId;

/// Cookie carrying the opaque session token.
pub const SESSION_COOKIE: &str = "__session";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("missing session")]
    Missing,
    #[error("unknown session")]
    Invalid,
    #[error("expired session")]
    Expired,
    #[error(transparent)]
    Repo(#[from] RepoError),
}

#[derive(Clone)]
pub struct SessionService {
    repo: Arc<dyn SessionsRepo>,
}

impl SessionService {
    pub fn new(repo: Arc<dyn SessionsRepo>) -> Self {
        Self { repo }
    }

    /// Resolve the user behind a session token, failing when there is none.
    pub async fn require_user_id(&self, token: Option<&str>) -> Result<UserId, SessionError> {
        let result = self.resolve(token).await;
        if let Err(err) = &result
            && !matches!(err, SessionError::Repo(_))
        {
            counter!("post_editor_session_rejected_total").increment(1);
        }
        result
    }

    async fn resolve(&self, token: Option<&str>) -> Result<UserId, SessionError> {
        let token = token
            .filter(|t| !t.is_empty())
            .ok_or(SessionError::Missing)?;

        let hash = hash_token(token);
        let session = self
            .repo
            .find_session(&hash)
            .await?
            .ok_or(SessionError::Invalid)?;

        if session.is_expired_at(OffsetDateTime::now_utc()) {
            debug!(
                target = "post_editor::session",
                fingerprint = %hex::encode(&hash[..4]),
                "session expired"
            );
            return Err(SessionError::Expired);
        }

        Ok(session.user_id)
    }
}

/// Sessions are stored by the SHA-256 digest of their token.
pub fn hash_token(token: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hasher.finalize().to_vec()
}
