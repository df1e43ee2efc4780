use axum::{
    http::{StatusCode, Uri, header::LOCATION},
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use tracing::debug;
use url::form_urlencoded::Serializer;

use crate::{
    application::session::{SESSION_COOKIE, SessionError},
    domain::entities::UserId,
    infra::http::repo_error_to_http,
};

use super::AdminState;

const SOURCE: &str = "infra::http::admin::session";

/// Resolve the editor behind the session cookie, or produce the response
/// that sends them to log in.
pub(super) async fn require_editor(
    state: &AdminState,
    jar: &CookieJar,
    uri: &Uri,
) -> Result<UserId, Response> {
    let token = jar.get(SESSION_COOKIE).map(|cookie| cookie.value());

    match state.sessions.require_user_id(token).await {
        Ok(user_id) => Ok(user_id),
        Err(SessionError::Repo(err)) => Err(repo_error_to_http(SOURCE, err).into_response()),
        Err(err) => {
            debug!(
                target = "post_editor::admin::session",
                path = %uri.path(),
                reason = %err,
                "redirecting to login"
            );
            Err(login_redirect(&state.editor.login_path, uri))
        }
    }
}

fn login_redirect(login_path: &str, uri: &Uri) -> Response {
    let redirect_to = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    let query = Serializer::new(String::new())
        .append_pair("redirectTo", redirect_to)
        .finish();

    let location = format!("{login_path}?{query}");
    (StatusCode::FOUND, [(LOCATION, location)]).into_response()
}
