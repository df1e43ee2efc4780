use crate::domain::{
    entities::{PostRecord, UserId},
    error::{DomainError, ensure},
};

use super::service::AdminPostService;
use super::types::AdminPostError;

impl AdminPostService {
    /// Load the post the editor page is about.
    ///
    /// A blank slug and a post that is missing or owned by someone else are
    /// both invariant violations: the editor is only linked for posts the
    /// user owns.
    pub async fn load_for_editor(
        &self,
        user_id: UserId,
        slug: &str,
    ) -> Result<PostRecord, AdminPostError> {
        ensure(!slug.is_empty(), || "params.slug is required".to_string())?;

        self.reader
            .find_for_owner(user_id, slug)
            .await?
            .ok_or_else(|| DomainError::invariant(format!("Post not found: {slug}")).into())
    }
}
