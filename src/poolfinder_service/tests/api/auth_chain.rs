use poolfinder_adapters::{JwtCodecConfig, JwtTokenCodec};
use poolfinder_core::{IdentityClaim, Role, TokenCodec};
use secrecy::Secret;
use serde_json::Value;

use crate::helpers::{TOKEN_SUBJECT_ID, TestApp, error_message};

#[tokio::test]
async fn missing_token_is_401() {
    let app = TestApp::new().await;

    let response = app.get("/api/admin/users", None).await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_message(response).await, "Access token required");
}

#[tokio::test]
async fn non_bearer_scheme_is_401() {
    let app = TestApp::new().await;
    let token = app.token_for(Role::Admin);

    let response = app
        .http_client
        .get(app.url("/api/admin/users"))
        .header("Authorization", format!("Token {token}"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn garbage_token_is_403() {
    let app = TestApp::new().await;

    let response = app.get("/api/auth/me", Some("not-a-jwt")).await;

    assert_eq!(response.status().as_u16(), 403);
    assert_eq!(error_message(response).await, "Invalid or expired token");
}

#[tokio::test]
async fn token_signed_with_another_secret_is_403() {
    let app = TestApp::new().await;
    let foreign = JwtTokenCodec::new(JwtCodecConfig::new(Secret::new("other".to_owned())));
    let token = foreign
        .issue(&IdentityClaim::new("id", "a@b.com", Role::Admin))
        .unwrap();

    let response = app.get("/api/admin/users", Some(token.as_str())).await;

    assert_eq!(response.status().as_u16(), 403);
    assert_eq!(error_message(response).await, "Invalid or expired token");
}

#[tokio::test]
async fn role_outside_allow_list_is_403() {
    let app = TestApp::new().await;

    for role in [Role::User, Role::PoolOwner] {
        let response = app
            .get("/api/admin/users", Some(&app.token_for(role)))
            .await;

        assert_eq!(response.status().as_u16(), 403);
        assert_eq!(error_message(response).await, "Insufficient permissions");
    }
}

#[tokio::test]
async fn unrecognized_role_is_never_permitted() {
    let app = TestApp::new().await;
    let token = app.token_for(Role::Unrecognized("SUPERUSER".to_owned()));

    let response = app.get("/api/geocode?address=Austin", Some(&token)).await;

    assert_eq!(response.status().as_u16(), 403);
    assert_eq!(error_message(response).await, "Insufficient permissions");
}

#[tokio::test]
async fn admin_reaches_the_handler_with_its_identity() {
    let app = TestApp::new().await;
    app.signed_up("first@example.com", None).await;

    let response = app
        .get("/api/admin/users", Some(&app.token_for(Role::Admin)))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["requested_by"]["id"], TOKEN_SUBJECT_ID);
    assert_eq!(body["requested_by"]["role"], "ADMIN");
    assert_eq!(body["requested_by"]["email"], "someone@example.com");
    assert_eq!(body["users"].as_array().unwrap().len(), 1);
    assert_eq!(body["users"][0]["email"], "first@example.com");
}

#[tokio::test]
async fn public_routes_need_no_token() {
    let app = TestApp::new().await;

    let response = app.get("/api/health", None).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "OK");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn unknown_route_is_404() {
    let app = TestApp::new().await;

    let response = app.get("/api/pools/nearby", None).await;

    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(error_message(response).await, "Route not found");
}
