use thiserror::Error;

use crate::{
    application::repos::RepoError,
    domain::{error::DomainError, posts::PostDraft},
};

#[derive(Debug, Error)]
pub enum AdminPostError {
    #[error(transparent)]
    Invariant(#[from] DomainError),
    #[error(transparent)]
    Repo(#[from] RepoError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePostCommand {
    pub slug: String,
    pub title: String,
    pub markdown: String,
}

impl From<PostDraft> for UpdatePostCommand {
    fn from(draft: PostDraft) -> Self {
        Self {
            slug: draft.slug,
            title: draft.title,
            markdown: draft.markdown,
        }
    }
}
