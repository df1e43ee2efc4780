#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use post_editor::{
    application::{
        admin::posts::AdminPostService,
        post::PostService,
        repos::{HealthRepo, PostsRepo, PostsWriteRepo, RepoError, SessionsRepo, UpdatePostParams},
        session::{SESSION_COOKIE, SessionService, hash_token},
    },
    config::EditorSettings,
    domain::entities::{PostRecord, SessionRecord, UserId},
    infra::http::{AdminState, HttpState, RouterState, build_router},
};
use time::{Duration, OffsetDateTime};
use tokio::task::JoinHandle;
use tower::ServiceExt;
use uuid::Uuid;

pub const EDITOR_TOKEN: &str = "editor-token";

/// Posts kept in memory; every update call is recorded.
#[derive(Default)]
pub struct MemoryPosts {
    posts: Mutex<Vec<PostRecord>>,
    updates: Mutex<Vec<UpdatePostParams>>,
}

impl MemoryPosts {
    pub fn insert(&self, post: PostRecord) {
        self.posts.lock().unwrap().push(post);
    }

    pub fn updates(&self) -> Vec<UpdatePostParams> {
        self.updates.lock().unwrap().clone()
    }

    pub fn get(&self, slug: &str) -> Option<PostRecord> {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .find(|post| post.slug == slug)
            .cloned()
    }
}

#[async_trait]
impl PostsRepo for MemoryPosts {
    async fn find_for_owner(
        &self,
        user_id: UserId,
        slug: &str,
    ) -> Result<Option<PostRecord>, RepoError> {
        Ok(self.get(slug).filter(|post| post.user_id == user_id))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<PostRecord>, RepoError> {
        Ok(self.get(slug))
    }
}

#[async_trait]
impl PostsWriteRepo for MemoryPosts {
    async fn update_post(&self, params: UpdatePostParams) -> Result<(), RepoError> {
        self.updates.lock().unwrap().push(params.clone());

        let mut posts = self.posts.lock().unwrap();
        let post = posts
            .iter_mut()
            .find(|post| post.slug == params.slug)
            .ok_or(RepoError::NotFound)?;
        post.title = params.title;
        post.markdown = params.markdown;
        post.updated_at = OffsetDateTime::now_utc();
        Ok(())
    }
}

pub struct SingleSession {
    record: SessionRecord,
}

#[async_trait]
impl SessionsRepo for SingleSession {
    async fn find_session(&self, token_hash: &[u8]) -> Result<Option<SessionRecord>, RepoError> {
        Ok((self.record.token_hash == token_hash).then(|| self.record.clone()))
    }
}

pub struct StaticHealth(pub bool);

#[async_trait]
impl HealthRepo for StaticHealth {
    async fn ping(&self) -> Result<(), RepoError> {
        if self.0 {
            Ok(())
        } else {
            Err(RepoError::Timeout)
        }
    }
}

pub struct TestApp {
    pub router: Router,
    pub posts: Arc<MemoryPosts>,
    pub editor: UserId,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_health(true)
    }

    pub fn with_health(healthy: bool) -> Self {
        let editor = UserId(Uuid::new_v4());
        let posts = Arc::new(MemoryPosts::default());
        let sessions = Arc::new(SingleSession {
            record: SessionRecord {
                token_hash: hash_token(EDITOR_TOKEN),
                user_id: editor,
                expires_at: OffsetDateTime::now_utc() + Duration::hours(1),
            },
        });

        let posts_repo: Arc<dyn PostsRepo> = posts.clone();
        let posts_write_repo: Arc<dyn PostsWriteRepo> = posts.clone();

        let state = RouterState {
            http: HttpState {
                posts: Arc::new(PostService::new(posts_repo.clone())),
                health: Arc::new(StaticHealth(healthy)),
            },
            admin: AdminState {
                posts: Arc::new(AdminPostService::new(posts_repo, posts_write_repo)),
                sessions: Arc::new(SessionService::new(sessions)),
                editor: Arc::new(EditorSettings::default()),
            },
        };

        Self {
            router: build_router(state),
            posts,
            editor,
        }
    }

    pub fn seed(&self, slug: &str, owner: UserId, title: &str, markdown: &str) {
        let now = OffsetDateTime::now_utc();
        self.posts.insert(PostRecord {
            slug: slug.to_string(),
            user_id: owner,
            title: title.to_string(),
            markdown: markdown.to_string(),
            created_at: now,
            updated_at: now,
        });
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    /// Drive a request on its own task so the caller can move the clock.
    pub fn spawn_send(&self, request: Request<Body>) -> JoinHandle<Response<Body>> {
        let router = self.router.clone();
        tokio::spawn(async move {
            router.oneshot(request).await.expect("router is infallible")
        })
    }
}

pub fn session_cookie() -> String {
    format!("{SESSION_COOKIE}={EDITOR_TOKEN}")
}

pub fn get(path: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .header(header::COOKIE, session_cookie())
        .body(Body::empty())
        .unwrap()
}

pub fn get_anonymous(path: &str) -> Request<Body> {
    Request::builder().uri(path).body(Body::empty()).unwrap()
}

pub fn post_form(path: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::COOKIE, session_cookie())
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

pub fn post_form_json(path: &str, body: &'static str) -> Request<Body> {
    let mut request = post_form(path, body);
    request.headers_mut().insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/json"),
    );
    request
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("location header")
        .to_str()
        .expect("ascii location")
}
