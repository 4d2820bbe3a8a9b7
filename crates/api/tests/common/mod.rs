#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use medora_api::auth::session::AdminConfig;
use medora_api::config::ServerConfig;
use medora_api::router::build_app_router;
use medora_api::state::AppState;
use medora_mail::Mailer;
use sqlx::PgPool;
use tower::ServiceExt;

/// Admin password accepted by [`test_config`].
pub const ADMIN_PASSWORD: &str = "correct-horse-battery";

/// Build a test `ServerConfig` with safe defaults.
///
/// Static pages are served from `tests/fixtures/public`.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3008".to_string()],
        request_timeout_secs: 30,
        site_url: "https://medora.test".to_string(),
        static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/public").to_string(),
        contact_recipient: "team@medora.test".to_string(),
        admin: AdminConfig {
            password: Some(ADMIN_PASSWORD.to_string()),
            session_secret: "integration-test-session-secret".to_string(),
            session_days: 7,
            secure_cookie: false,
        },
    }
}

/// Build the application router over `pool` with `config` and a log-only
/// mailer.
pub fn build_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        mailer: Arc::new(Mailer::log_only()),
    };
    build_app_router(state, &config)
}

/// Build the full application router with the production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_with_config(pool, test_config())
}

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request should complete")
}

fn json_request(
    method: Method,
    uri: &str,
    body: serde_json::Value,
    cookie: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

fn empty_request(method: Method, uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::empty()).expect("request should build")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, empty_request(Method::GET, uri, None)).await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    send(app, empty_request(Method::GET, uri, Some(cookie))).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, body, None)).await
}

pub async fn post_json_with_cookie(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    cookie: &str,
) -> Response<Body> {
    send(app, json_request(Method::POST, uri, body, Some(cookie))).await
}

pub async fn patch_json_with_cookie(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    cookie: &str,
) -> Response<Body> {
    send(app, json_request(Method::PATCH, uri, body, Some(cookie))).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, empty_request(Method::DELETE, uri, None)).await
}

pub async fn delete_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    send(app, empty_request(Method::DELETE, uri, Some(cookie))).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

/// Collect a response body as text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

/// First `Set-Cookie` header of `response`.
pub fn set_cookie(response: &Response<Body>) -> String {
    response
        .headers()
        .get(SET_COOKIE)
        .expect("response should set a cookie")
        .to_str()
        .expect("cookie should be ASCII")
        .to_string()
}

/// Log in with [`ADMIN_PASSWORD`] and return a `Cookie` header value.
pub async fn login_cookie(app: Router) -> String {
    let response = post_json(
        app,
        "/api/admin/auth",
        serde_json::json!({ "password": ADMIN_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let header = set_cookie(&response);
    header
        .split(';')
        .next()
        .expect("cookie should have a name=value pair")
        .to_string()
}

/// Valid post body for `POST /api/admin/posts`.
pub fn new_post(title: &str, category: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "excerpt": format!("About {title}"),
        "content": format!("# {title}\n\nSome **markdown** content."),
        "category": category,
        "author": "Anna Solovyova",
    })
}
