use fake::{Fake, faker::internet::en::SafeEmail};
use serde_json::{Value, json};

use crate::helpers::{PASSWORD, TestApp, error_message};

fn random_email() -> String {
    SafeEmail().fake::<String>().to_lowercase()
}

#[tokio::test]
async fn register_returns_201_with_a_usable_token() {
    let app = TestApp::new().await;
    let email = random_email();

    let response = app
        .register(&json!({
            "email": email,
            "username": "swimmer",
            "password": PASSWORD,
            "phone_number": "(555) 123-4567",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["user"]["role"], "USER");
    assert_eq!(body["user"]["phone_number"], "+15551234567");
    assert_eq!(body["user"]["email_verified"], false);

    let token = body["access_token"].as_str().unwrap();
    let me = app.get("/api/auth/me", Some(token)).await;
    assert_eq!(me.status().as_u16(), 200);
    let me: Value = me.json().await.unwrap();
    assert_eq!(me["email"], email.as_str());
    assert_eq!(me["username"], "swimmer");
}

#[tokio::test]
async fn duplicate_email_is_409() {
    let app = TestApp::new().await;
    let email = random_email();
    app.signed_up(&email, None).await;

    let response = app
        .register(&json!({
            "email": email,
            "username": "another",
            "password": PASSWORD,
        }))
        .await;

    assert_eq!(response.status().as_u16(), 409);
    assert_eq!(error_message(response).await, "User already exists");
}

#[tokio::test]
async fn invalid_registration_input_is_400() {
    let app = TestApp::new().await;

    let cases = [
        json!({"email": "not-an-email", "username": "swimmer", "password": PASSWORD}),
        json!({"email": random_email(), "username": "swimmer", "password": "short"}),
        json!({"email": random_email(), "username": "x", "password": PASSWORD}),
        json!({"email": random_email(), "username": "swimmer", "password": PASSWORD, "phone_number": "12"}),
    ];

    for case in cases {
        let response = app.register(&case).await;
        assert_eq!(response.status().as_u16(), 400, "accepted {case}");
    }
}

#[tokio::test]
async fn login_with_form_credentials() {
    let app = TestApp::new().await;
    let email = random_email();
    app.signed_up(&email, None).await;

    let response = app.login(&email, PASSWORD).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["user"]["email"], email.as_str());

    let token = body["access_token"].as_str().unwrap();
    let me = app.get("/api/auth/me", Some(token)).await;
    assert_eq!(me.status().as_u16(), 200);
}

#[tokio::test]
async fn bad_credentials_are_indistinguishable() {
    let app = TestApp::new().await;
    let email = random_email();
    app.signed_up(&email, None).await;

    let wrong_password = app.login(&email, "wrong password!").await;
    let unknown_user = app.login("nobody@example.com", PASSWORD).await;
    let malformed = app.login("not-an-email", "x").await;

    for response in [wrong_password, unknown_user, malformed] {
        assert_eq!(response.status().as_u16(), 401);
        assert_eq!(error_message(response).await, "Invalid credentials");
    }
}

#[tokio::test]
async fn me_for_a_deleted_or_unknown_subject_is_404() {
    let app = TestApp::new().await;

    let response = app
        .get("/api/auth/me", Some(&app.token_for(poolfinder_core::Role::User)))
        .await;

    assert_eq!(response.status().as_u16(), 404);
}
