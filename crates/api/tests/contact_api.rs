//! HTTP-level tests for the contact form relay.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use sqlx::PgPool;

fn submission() -> serde_json::Value {
    serde_json::json!({
        "name": "Dana Reyes",
        "company": "Northwind Clinics",
        "role": "CTO",
        "email": "dana@northwind.example",
        "adoption-breaks": "Nurses stop using the tablet app after week two.",
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn valid_submission_succeeds(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/contact", submission()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Form submitted successfully");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_field_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let mut body = submission();
    body.as_object_mut().unwrap().remove("adoption-breaks");

    let response = post_json(app, "/api/contact", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "All fields are required");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blank_field_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let mut body = submission();
    body["company"] = serde_json::json!("   ");

    let response = post_json(app, "/api/contact", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_email_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let mut body = submission();
    body["email"] = serde_json::json!("not-an-email");

    let response = post_json(app, "/api/contact", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid email address");
    assert_eq!(json["code"], "VALIDATION_ERROR");
}
