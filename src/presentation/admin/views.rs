use askama::Template;

use crate::domain::{entities::PostRecord, posts::PostFieldErrors, posts::PostSubmission};

/// State of the post editor form.
#[derive(Clone, Debug)]
pub struct AdminPostEditView {
    pub form_action: String,
    pub preview_action: String,
    pub title: String,
    pub slug: String,
    pub markdown: String,
    pub title_error: Option<&'static str>,
    pub slug_error: Option<&'static str>,
    pub markdown_error: Option<&'static str>,
}

impl AdminPostEditView {
    /// Editor pre-filled from a stored post.
    pub fn from_post(path: &str, post: &PostRecord) -> Self {
        Self {
            form_action: path.to_string(),
            preview_action: format!("{path}/preview"),
            title: post.title.clone(),
            slug: post.slug.clone(),
            markdown: post.markdown.clone(),
            title_error: None,
            slug_error: None,
            markdown_error: None,
        }
    }

    /// Editor re-rendered after a rejected submission, keeping what was typed.
    pub fn from_rejected(path: &str, submission: &PostSubmission, errors: PostFieldErrors) -> Self {
        Self {
            form_action: path.to_string(),
            preview_action: format!("{path}/preview"),
            title: submission.title.clone().unwrap_or_default(),
            slug: submission.slug.clone().unwrap_or_default(),
            markdown: submission.markdown.clone().unwrap_or_default(),
            title_error: errors.title,
            slug_error: errors.slug,
            markdown_error: errors.markdown,
        }
    }
}

#[derive(Template)]
#[template(path = "admin/post_edit.html")]
pub struct AdminPostEditTemplate {
    pub view: AdminPostEditView,
}
