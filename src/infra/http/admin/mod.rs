mod posts;
mod session;
mod state;

pub use state::AdminState;

use axum::{
    Router,
    routing::{get, post},
};

use super::RouterState;

pub(super) fn routes() -> Router<RouterState> {
    Router::new()
        .route(
            "/posts/admin/{slug}",
            get(posts::admin_post_edit).post(posts::admin_post_update),
        )
        .route(
            "/posts/admin/{slug}/preview",
            post(posts::admin_post_preview),
        )
}
