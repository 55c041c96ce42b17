use serde_json::{Value, json};

use crate::helpers::{LINK_BASE, TestApp, error_message};

fn sms_code(body: &str) -> String {
    let start = body.find("is: ").unwrap() + "is: ".len();
    body[start..start + 6].to_owned()
}

fn link_token(body: &str) -> String {
    let prefix = format!("{LINK_BASE}/verify-email?token=");
    let start = body.find(&prefix).unwrap() + prefix.len();
    body[start..]
        .split_whitespace()
        .next()
        .unwrap()
        .to_owned()
}

async fn profile(app: &TestApp, token: &str) -> Value {
    app.get("/api/auth/me", Some(token)).await.json().await.unwrap()
}

#[tokio::test]
async fn phone_verification_round_trip() {
    let app = TestApp::new().await;
    let token = app.signed_up("phone@example.com", Some("555-123-4567")).await;

    let response = app
        .post_json("/api/auth/verify/phone", Some(&token), &json!({}))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let sent = app.sms.sent.lock().unwrap().clone();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient, "+15551234567");
    assert!(sent[0].body.contains("expires in 10 minutes"));
    let code = sms_code(&sent[0].body);
    assert!(code.chars().all(|c| c.is_ascii_digit()));

    let confirm = json!({"channel": "sms", "code": code});
    let response = app
        .post_json("/api/auth/verify/confirm", Some(&token), &confirm)
        .await;
    assert_eq!(response.status().as_u16(), 200);
    assert!(profile(&app, &token).await["phone_verified"].as_bool().unwrap());

    // Codes are single use.
    let replay = app
        .post_json("/api/auth/verify/confirm", Some(&token), &confirm)
        .await;
    assert_eq!(replay.status().as_u16(), 400);
    assert_eq!(error_message(replay).await, "No pending verification");
}

#[tokio::test]
async fn wrong_code_is_rejected() {
    let app = TestApp::new().await;
    let token = app.signed_up("wrong@example.com", Some("555-123-4567")).await;
    app.post_json("/api/auth/verify/phone", Some(&token), &json!({}))
        .await;

    let code = sms_code(&app.sms.sent.lock().unwrap()[0].body);
    let wrong = if code == "123456" { "654321" } else { "123456" };

    let response = app
        .post_json(
            "/api/auth/verify/confirm",
            Some(&token),
            &json!({"channel": "sms", "code": wrong}),
        )
        .await;

    assert_eq!(response.status().as_u16(), 400);
    assert!(!profile(&app, &token).await["phone_verified"].as_bool().unwrap());
}

#[tokio::test]
async fn malformed_code_is_400() {
    let app = TestApp::new().await;
    let token = app.signed_up("malformed@example.com", Some("555-123-4567")).await;

    let response = app
        .post_json(
            "/api/auth/verify/confirm",
            Some(&token),
            &json!({"channel": "sms", "code": "12ab"}),
        )
        .await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn phone_verification_without_a_phone_number_is_400() {
    let app = TestApp::new().await;
    let token = app.signed_up("nophone@example.com", None).await;

    let response = app
        .post_json("/api/auth/verify/phone", Some(&token), &json!({}))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_message(response).await, "Account has no phone number");
    assert!(app.sms.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn email_verification_round_trip() {
    let app = TestApp::new().await;
    let token = app.signed_up("mail@example.com", None).await;

    let response = app
        .post_json("/api/auth/verify/email", Some(&token), &json!({}))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let sent = app.email.sent.lock().unwrap().clone();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient, "mail@example.com");
    let link_token = link_token(&sent[0].body);

    let response = app
        .post_json(
            "/api/auth/verify/confirm",
            Some(&token),
            &json!({"channel": "email", "code": link_token}),
        )
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "email verified");

    let me = profile(&app, &token).await;
    assert!(me["email_verified"].as_bool().unwrap());
    assert!(!me["phone_verified"].as_bool().unwrap());
}

#[tokio::test]
async fn verification_routes_require_a_token() {
    let app = TestApp::new().await;

    for path in [
        "/api/auth/verify/phone",
        "/api/auth/verify/email",
        "/api/auth/verify/confirm",
    ] {
        let response = app.post_json(path, None, &json!({})).await;
        assert_eq!(response.status().as_u16(), 401, "{path}");
    }
}
