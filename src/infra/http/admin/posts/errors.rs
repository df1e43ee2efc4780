use axum::http::StatusCode;

use crate::{
    application::{admin::posts::AdminPostError, error::HttpError},
    infra::http::repo_error_to_http,
};

pub(super) fn admin_post_error(source: &'static str, err: AdminPostError) -> HttpError {
    match err {
        AdminPostError::Invariant(err) => HttpError::from_error(
            source,
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            &err,
        ),
        AdminPostError::Repo(repo) => repo_error_to_http(source, repo),
    }
}
