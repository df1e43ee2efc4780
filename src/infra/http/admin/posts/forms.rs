use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::form_urlencoded;

use crate::domain::posts::PostSubmission;

/// Unreserved characters stay literal inside a path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Read the editor fields from a urlencoded body. The first occurrence of a
/// field wins; unknown fields are ignored.
pub(super) fn parse_post_submission(body: &[u8]) -> PostSubmission {
    let mut submission = PostSubmission::default();
    for (key, value) in form_urlencoded::parse(body) {
        let slot = match key.as_ref() {
            "title" => &mut submission.title,
            "slug" => &mut submission.slug,
            "markdown" => &mut submission.markdown,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.into_owned());
        }
    }
    submission
}

/// Canonical location of a post.
pub(super) fn post_location(slug: &str) -> String {
    format!("/posts/{}", utf8_percent_encode(slug, PATH_SEGMENT))
}
