use std::sync::Arc;

use axum::http::StatusCode;

use crate::application::error::HttpError;
use crate::application::render::render_markdown;
use crate::application::repos::PostsRepo;
use crate::presentation::views::PostView;

const SOURCE: &str = "application::post::PostService";

#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostsRepo>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostsRepo>) -> Self {
        Self { posts }
    }

    pub async fn post_view(&self, slug: &str) -> Result<Option<PostView>, HttpError> {
        let record = self.posts.find_by_slug(slug).await.map_err(|err| {
            HttpError::from_error(
                SOURCE,
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to load post",
                &err,
            )
        })?;

        Ok(record.map(|record| PostView {
            content_html: render_markdown(&record.markdown),
            title: record.title,
            slug: record.slug,
        }))
    }
}
