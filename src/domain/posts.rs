//! Post edit submissions and their field-level validation.

use serde::Serialize;

pub const TITLE_REQUIRED: &str = "Title is required";
pub const SLUG_REQUIRED: &str = "Slug is required";
pub const MARKDOWN_REQUIRED: &str = "Markdown is required";

/// Raw field values as submitted by the editor form. Absent fields are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostSubmission {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub markdown: Option<String>,
}

/// Per-field validation outcome. Every field is reported, `None` meaning valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PostFieldErrors {
    pub title: Option<&'static str>,
    pub slug: Option<&'static str>,
    pub markdown: Option<&'static str>,
}

impl PostFieldErrors {
    pub fn has_errors(&self) -> bool {
        self.title.is_some() || self.slug.is_some() || self.markdown.is_some()
    }
}

/// A submission whose three fields are all present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub slug: String,
    pub title: String,
    pub markdown: String,
}

impl PostSubmission {
    /// Check that every field carries a non-empty value.
    ///
    /// Values are not trimmed: a field holding only whitespace counts as
    /// present and is persisted verbatim.
    pub fn validate(&self) -> Result<PostDraft, PostFieldErrors> {
        let errors = PostFieldErrors {
            title: required(&self.title, TITLE_REQUIRED),
            slug: required(&self.slug, SLUG_REQUIRED),
            markdown: required(&self.markdown, MARKDOWN_REQUIRED),
        };

        match (&self.title, &self.slug, &self.markdown) {
            (Some(title), Some(slug), Some(markdown)) if !errors.has_errors() => Ok(PostDraft {
                slug: slug.clone(),
                title: title.clone(),
                markdown: markdown.clone(),
            }),
            _ => Err(errors),
        }
    }
}

fn required(value: &Option<String>, message: &'static str) -> Option<&'static str> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => None,
        _ => Some(message),
    }
}
