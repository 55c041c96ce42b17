use poolfinder_core::Role;
use serde_json::{Value, json};
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{method, query_param},
};

use crate::helpers::{TestApp, error_message};

fn austin() -> Value {
    json!({
        "status": "OK",
        "results": [{
            "formatted_address": "Austin, TX, USA",
            "place_id": "ChIJLwPMoJm1RIYRetVp1EtGm10",
            "geometry": {"location": {"lat": 30.2672, "lng": -97.7431}},
            "address_components": []
        }]
    })
}

#[tokio::test]
async fn every_known_role_may_geocode() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(query_param("address", "Austin"))
        .and(query_param("key", "maps-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(austin()))
        .expect(3)
        .mount(&app.geocode_server)
        .await;

    for role in [Role::User, Role::PoolOwner, Role::Admin] {
        let response = app
            .get("/api/geocode?address=Austin", Some(&app.token_for(role)))
            .await;

        assert_eq!(response.status().as_u16(), 200);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["formatted_address"], "Austin, TX, USA");
        assert_eq!(body["coordinates"]["lat"], 30.2672);
    }
}

#[tokio::test]
async fn reverse_geocode_sends_latlng() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .and(query_param("latlng", "30.2672,-97.7431"))
        .respond_with(ResponseTemplate::new(200).set_body_json(austin()))
        .expect(1)
        .mount(&app.geocode_server)
        .await;

    let response = app
        .get(
            "/api/geocode/reverse?lat=30.2672&lng=-97.7431",
            Some(&app.token_for(Role::User)),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn out_of_range_coordinates_are_400() {
    let app = TestApp::new().await;

    let response = app
        .get(
            "/api/geocode/reverse?lat=91&lng=0",
            Some(&app.token_for(Role::User)),
        )
        .await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn no_match_is_404() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "ZERO_RESULTS", "results": []})),
        )
        .mount(&app.geocode_server)
        .await;

    let response = app
        .get("/api/geocode?address=nowhere", Some(&app.token_for(Role::User)))
        .await;

    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(error_message(response).await, "No results found");
}

#[tokio::test]
async fn provider_failure_is_502() {
    let app = TestApp::new().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OVER_QUERY_LIMIT",
            "results": [],
            "error_message": "quota"
        })))
        .mount(&app.geocode_server)
        .await;

    let response = app
        .get("/api/geocode?address=Austin", Some(&app.token_for(Role::User)))
        .await;

    assert_eq!(response.status().as_u16(), 502);
    assert_eq!(error_message(response).await, "Geocoding service unavailable");
}

#[tokio::test]
async fn bounds_enclose_all_points() {
    let app = TestApp::new().await;

    let response = app
        .post_json(
            "/api/geocode/bounds",
            Some(&app.token_for(Role::PoolOwner)),
            &json!({"points": [
                {"lat": 30.0, "lng": -98.0},
                {"lat": 31.5, "lng": -97.0},
                {"lat": 30.5, "lng": -97.5}
            ]}),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["northeast"], json!({"lat": 31.5, "lng": -97.0}));
    assert_eq!(body["southwest"], json!({"lat": 30.0, "lng": -98.0}));
}

#[tokio::test]
async fn geocoding_requires_a_token() {
    let app = TestApp::new().await;

    let response = app.get("/api/geocode?address=Austin", None).await;

    assert_eq!(response.status().as_u16(), 401);
}
