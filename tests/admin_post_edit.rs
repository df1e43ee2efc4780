mod support;

use axum::http::StatusCode;
use insta::assert_json_snapshot;
use post_editor::{application::repos::UpdatePostParams, domain::entities::UserId};
use serde_json::{Value, json};
use tokio::time::{Duration, Instant};
use uuid::Uuid;

use support::{TestApp, body_text, get, get_anonymous, location, post_form, post_form_json};

const EDIT_PATH: &str = "/posts/admin/hello-world";

fn app_with_post() -> TestApp {
    let app = TestApp::new();
    app.seed(
        "hello-world",
        app.editor,
        "Hello, world and friends",
        "# Hello\n\nFirst post.",
    );
    app
}

#[tokio::test]
async fn loader_renders_form_prefilled_from_post() {
    let app = app_with_post();

    let response = app.send(get(EDIT_PATH)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains(r#"id="post-edit-form""#));
    assert!(html.contains(r#"action="/posts/admin/hello-world""#));
    assert!(html.contains(r#"value="Hello, world and friends""#));
    assert!(html.contains(r#"name="slug""#));
    assert!(html.contains(r#"value="hello-world""#));
    assert!(html.contains("# Hello\n\nFirst post.</textarea>"));
    assert!(html.contains(r#"minlength="10""#));
    assert!(html.contains(r#"rows="20""#));
    assert!(html.contains("Update Post"));
    assert!(!html.contains("data-error-for"));
}

#[tokio::test]
async fn loader_without_session_redirects_to_login() {
    let app = app_with_post();

    let response = app.send(get_anonymous(EDIT_PATH)).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(
        location(&response),
        "/login?redirectTo=%2Fposts%2Fadmin%2Fhello-world"
    );
}

#[tokio::test]
async fn loader_refuses_post_owned_by_someone_else() {
    let app = TestApp::new();
    app.seed(
        "not-mine",
        UserId(Uuid::new_v4()),
        "Somebody else's post",
        "body",
    );

    let response = app.send(get("/posts/admin/not-mine")).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_text(response).await;
    assert!(!body.contains("<form"));
    assert!(!body.contains("Somebody else"));
}

#[tokio::test]
async fn loader_refuses_unknown_post() {
    let app = TestApp::new();

    let response = app.send(get("/posts/admin/missing")).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body_text(response).await.contains("<form"));
}

#[tokio::test(start_paused = true)]
async fn action_with_missing_fields_returns_error_object() {
    let app = app_with_post();

    let response = app
        .send(post_form_json(EDIT_PATH, "title=&slug=hello-world"))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let errors: Value = serde_json::from_str(&body_text(response).await).expect("json body");
    assert_eq!(
        errors,
        json!({
            "title": "Title is required",
            "slug": null,
            "markdown": "Markdown is required",
        })
    );
    insta::with_settings!({ sort_maps => true }, {
        assert_json_snapshot!(errors, @r#"
        {
          "markdown": "Markdown is required",
          "slug": null,
          "title": "Title is required"
        }
        "#);
    });

    assert!(app.posts.updates().is_empty());
}

#[tokio::test(start_paused = true)]
async fn action_reports_every_missing_field() {
    let app = app_with_post();

    let response = app.send(post_form_json(EDIT_PATH, "")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let errors: Value = serde_json::from_str(&body_text(response).await).expect("json body");
    assert_eq!(
        errors,
        json!({
            "title": "Title is required",
            "slug": "Slug is required",
            "markdown": "Markdown is required",
        })
    );
    assert!(app.posts.updates().is_empty());
}

#[tokio::test(start_paused = true)]
async fn action_rerenders_form_with_inline_errors_for_browsers() {
    let app = app_with_post();

    let response = app
        .send(post_form(
            EDIT_PATH,
            "title=Only+a+title+here&slug=&markdown=",
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains(r#"value="Only a title here""#));
    assert!(html.contains(r#"data-error-for="slug">Slug is required</em>"#));
    assert!(html.contains(r#"data-error-for="markdown">Markdown is required</em>"#));
    assert!(!html.contains(r#"data-error-for="title""#));
    assert!(app.posts.updates().is_empty());
}

#[tokio::test(start_paused = true)]
async fn action_persists_exact_values_and_redirects() {
    let app = app_with_post();

    let response = app
        .send(post_form(
            EDIT_PATH,
            "title=+A+fresh+title+&slug=hello-world&markdown=%23+Updated%0A%0ABody",
        ))
        .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/posts/hello-world");

    assert_eq!(
        app.posts.updates(),
        vec![UpdatePostParams {
            slug: "hello-world".to_string(),
            title: " A fresh title ".to_string(),
            markdown: "# Updated\n\nBody".to_string(),
        }]
    );
    let stored = app.posts.get("hello-world").expect("post kept");
    assert_eq!(stored.title, " A fresh title ");
}

#[tokio::test(start_paused = true)]
async fn action_updates_the_submitted_slug() {
    let app = app_with_post();
    app.seed("second post", app.editor, "Second post title", "two");

    let response = app
        .send(post_form(
            EDIT_PATH,
            "title=Retitled+second+post&slug=second+post&markdown=changed",
        ))
        .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/posts/second%20post");

    let updates = app.posts.updates();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].slug, "second post");
    assert_eq!(
        app.posts.get("hello-world").expect("untouched").title,
        "Hello, world and friends"
    );
}

#[tokio::test(start_paused = true)]
async fn action_for_unknown_submitted_slug_is_not_found() {
    let app = app_with_post();

    let response = app
        .send(post_form(
            EDIT_PATH,
            "title=Long+enough+title&slug=nope&markdown=body",
        ))
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.posts.updates().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn action_waits_before_validating() {
    let app = app_with_post();

    let started = Instant::now();
    let response = app.send(post_form_json(EDIT_PATH, "")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(started.elapsed() >= Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn action_waits_before_persisting() {
    let app = app_with_post();

    let started = Instant::now();
    let response = app
        .send(post_form(
            EDIT_PATH,
            "title=Long+enough+title&slug=hello-world&markdown=body",
        ))
        .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert!(started.elapsed() >= Duration::from_secs(1));
}

/// Let the spawned request run until it parks on the submit timer.
async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn action_persists_only_after_the_delay_elapses() {
    let app = app_with_post();

    let handle = app.spawn_send(post_form(
        EDIT_PATH,
        "title=Long+enough+title&slug=hello-world&markdown=body",
    ));
    settle().await;

    tokio::time::advance(Duration::from_millis(999)).await;
    settle().await;
    assert!(!handle.is_finished());
    assert!(app.posts.updates().is_empty());

    tokio::time::advance(Duration::from_millis(2)).await;
    let response = handle.await.expect("request task");
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(app.posts.updates().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn action_reports_field_errors_only_after_the_delay_elapses() {
    let app = app_with_post();

    let handle = app.spawn_send(post_form_json(EDIT_PATH, ""));
    settle().await;

    tokio::time::advance(Duration::from_millis(999)).await;
    settle().await;
    assert!(!handle.is_finished());

    tokio::time::advance(Duration::from_millis(2)).await;
    let response = handle.await.expect("request task");
    assert_eq!(response.status(), StatusCode::OK);
    let errors: Value = serde_json::from_str(&body_text(response).await).expect("json body");
    assert_eq!(errors["title"], "Title is required");
    assert!(app.posts.updates().is_empty());
}

#[tokio::test(start_paused = true)]
async fn action_without_session_waits_then_redirects_to_login() {
    let app = app_with_post();
    let request = axum::http::Request::builder()
        .method("POST")
        .uri(EDIT_PATH)
        .header(
            axum::http::header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(axum::body::Body::from(
            "title=Long+enough+title&slug=hello-world&markdown=body",
        ))
        .unwrap();

    let started = Instant::now();
    let response = app.send(request).await;
    assert!(started.elapsed() >= Duration::from_secs(1));
    assert_eq!(response.status(), StatusCode::FOUND);
    assert!(location(&response).starts_with("/login?redirectTo="));
    assert!(app.posts.updates().is_empty());
}

#[tokio::test]
async fn preview_renders_submitted_values_without_persisting() {
    let app = app_with_post();

    let response = app
        .send(post_form(
            "/posts/admin/hello-world/preview",
            "title=Draft+title&slug=hello-world&markdown=Some+*emphasis*%3Cscript%3E%3C%2Fscript%3E",
        ))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains(r#"data-slug="hello-world""#));
    assert!(html.contains("Draft title</h1>"));
    assert!(html.contains("<em>emphasis</em>"));
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<form"));
    assert!(app.posts.updates().is_empty());
}
