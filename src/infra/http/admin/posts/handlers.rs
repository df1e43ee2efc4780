use axum::{
    Json,
    body::Bytes,
    extract::{OriginalUri, Path, State},
    http::{HeaderMap, StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use metrics::counter;
use tracing::debug;

use crate::{
    application::render::render_markdown,
    domain::posts::{PostFieldErrors, PostSubmission},
    infra::http::{admin::AdminState, wants_json},
    presentation::{
        admin::views::{AdminPostEditTemplate, AdminPostEditView},
        views::{PostPreviewTemplate, PostView, render_template_response},
    },
};

use super::super::session::require_editor;
use super::errors::admin_post_error;
use super::forms::{parse_post_submission, post_location};

/// Render the editor for a post owned by the signed-in user.
pub(crate) async fn admin_post_edit(
    State(state): State<AdminState>,
    OriginalUri(uri): OriginalUri,
    Path(slug): Path<String>,
    jar: CookieJar,
) -> Response {
    let user_id = match require_editor(&state, &jar, &uri).await {
        Ok(user_id) => user_id,
        Err(response) => return response,
    };

    let post = match state.posts.load_for_editor(user_id, &slug).await {
        Ok(post) => post,
        Err(err) => return admin_post_error("infra::http::admin_post_edit", err).into_response(),
    };

    let view = AdminPostEditView::from_post(uri.path(), &post);
    render_template_response(AdminPostEditTemplate { view }, StatusCode::OK)
}

/// Validate and persist an editor submission.
///
/// The configured submit delay elapses before the session is checked or the
/// body looked at. The update is keyed by the submitted slug, not the one in
/// the path.
pub(crate) async fn admin_post_update(
    State(state): State<AdminState>,
    OriginalUri(uri): OriginalUri,
    jar: CookieJar,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    tokio::time::sleep(state.editor.submit_delay).await;

    let user_id = match require_editor(&state, &jar, &uri).await {
        Ok(user_id) => user_id,
        Err(response) => return response,
    };

    let submission = parse_post_submission(&body);
    let draft = match submission.validate() {
        Ok(draft) => draft,
        Err(errors) => {
            counter!("post_editor_validation_failure_total").increment(1);
            debug!(
                target = "post_editor::admin::posts",
                path = %uri.path(),
                errors = ?errors,
                "post submission rejected"
            );
            return respond_with_field_errors(&headers, uri.path(), &submission, errors);
        }
    };

    let location = post_location(&draft.slug);
    if let Err(err) = state.posts.update_post(user_id, draft.into()).await {
        return admin_post_error("infra::http::admin_post_update", err).into_response();
    }

    (StatusCode::FOUND, [(LOCATION, location)]).into_response()
}

/// Read-only rendering of the submitted values, shown while an update is in flight.
pub(crate) async fn admin_post_preview(
    State(state): State<AdminState>,
    OriginalUri(uri): OriginalUri,
    jar: CookieJar,
    body: Bytes,
) -> Response {
    if let Err(response) = require_editor(&state, &jar, &uri).await {
        return response;
    }

    let PostSubmission {
        title,
        slug,
        markdown,
    } = parse_post_submission(&body);

    let view = PostView {
        slug: slug.unwrap_or_default(),
        title: title.unwrap_or_default(),
        content_html: render_markdown(markdown.as_deref().unwrap_or_default()),
    };
    render_template_response(PostPreviewTemplate { view }, StatusCode::OK)
}

fn respond_with_field_errors(
    headers: &HeaderMap,
    path: &str,
    submission: &PostSubmission,
    errors: PostFieldErrors,
) -> Response {
    if wants_json(headers) {
        return (StatusCode::OK, Json(errors)).into_response();
    }

    let view = AdminPostEditView::from_rejected(path, submission, errors);
    render_template_response(AdminPostEditTemplate { view }, StatusCode::OK)
}
