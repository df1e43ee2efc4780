use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::{
    application::{post::PostService, repos::HealthRepo},
    presentation::views::{PostTemplate, render_not_found_response, render_template_response},
};

use super::{RouterState, db_health_response};

#[derive(Clone)]
pub struct HttpState {
    pub posts: Arc<PostService>,
    pub health: Arc<dyn HealthRepo>,
}

pub(super) fn routes() -> Router<RouterState> {
    Router::new()
        .route("/posts/{slug}", get(post_detail))
        .route("/_health/db", get(public_health))
        .fallback(fallback)
}

async fn post_detail(State(state): State<HttpState>, Path(slug): Path<String>) -> Response {
    match state.posts.post_view(&slug).await {
        Ok(Some(view)) => render_template_response(PostTemplate { view }, StatusCode::OK),
        Ok(None) => render_not_found_response(),
        Err(err) => err.into_response(),
    }
}

async fn public_health(State(state): State<HttpState>) -> Response {
    db_health_response(state.health.ping().await)
}

async fn fallback() -> Response {
    render_not_found_response()
}
