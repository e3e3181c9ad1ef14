// ABOUTME: HTTP integration tests for the energy calculation and health endpoints
// ABOUTME: Drives the production router in-process and checks status codes, bodies and headers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use axum::http::{Method, StatusCode};
use pierre_energy_server::config::environment::ServerConfig;
use serde_json::{json, Value};

mod common;
mod helpers;

use helpers::axum_test::AxumTestRequest;

const BMR: &str = "/api/bmr";

// ============================================================================
// SUCCESSFUL CALCULATIONS
// ============================================================================

#[tokio::test]
async fn test_reference_profile_response() {
    let response = AxumTestRequest::post(BMR)
        .json(&json!({
            "profile": {
                "age": 30, "sex": "male", "height_cm": 180, "weight_kg": 80,
                "activity_level": "moderate", "goal": "maintain"
            }
        }))
        .send(common::test_router())
        .await
        .assert_status(StatusCode::OK);

    assert_eq!(
        response.header("content-type"),
        Some("application/json")
    );
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({
            "bmr": 1780.0,
            "tdee": 2759.0,
            "target_calories": 2759,
            "macros": {"protein_g": 144.0, "carbs_g": 373.3, "fat_g": 76.6}
        })
    );
}

#[tokio::test]
async fn test_response_field_order_and_numbers() {
    let text = AxumTestRequest::post(BMR)
        .json(&json!({"profile": {"age": 25, "sex": "female", "height_cm": 165, "weight_kg": 60,
                                   "activity_level": "light", "goal": "fat_loss"}}))
        .send(common::test_router())
        .await
        .assert_status(StatusCode::OK)
        .text();

    assert_eq!(
        text,
        r#"{"bmr":1345.25,"tdee":1849.72,"target_calories":1350,"macros":{"protein_g":132.0,"carbs_g":121.1,"fat_g":37.5}}"#
    );
}

#[tokio::test]
async fn test_repeated_requests_are_byte_identical() {
    let body = json!({"profile": {"age": 35, "height_cm": 177.5, "weight_kg": 82.3,
                                  "activity_level": "light", "goal": "bulk"}});

    let first = AxumTestRequest::post(BMR)
        .json(&body)
        .send(common::test_router())
        .await
        .bytes();
    let second = AxumTestRequest::post(BMR)
        .json(&body)
        .send(common::test_router())
        .await
        .bytes();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_missing_measurements_serialize_as_null() {
    let body: Value = AxumTestRequest::post(BMR)
        .json(&json!({"profile": {"age": 30}}))
        .send(common::test_router())
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert!(body["bmr"].is_null());
    assert!(body["tdee"].is_null());
    assert!(body["target_calories"].is_null());
    assert!(body["macros"]["protein_g"].is_null());
}

#[tokio::test]
async fn test_content_type_is_not_required() {
    let body: Value = AxumTestRequest::post(BMR)
        .header("content-type", "text/plain")
        .raw(r#"{"profile":{"age":30,"height_cm":180,"weight_kg":80}}"#)
        .send(common::test_router())
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["target_calories"], 2759);
}

// ============================================================================
// ERROR RESPONSES
// ============================================================================

#[tokio::test]
async fn test_missing_profile_is_bad_request() {
    for body in [json!({}), json!({"profile": null}), json!({"profile": false}), json!([1, 2])] {
        let response: Value = AxumTestRequest::post(BMR)
            .json(&body)
            .send(common::test_router())
            .await
            .assert_status(StatusCode::BAD_REQUEST)
            .json();
        assert_eq!(response, json!({"error": "Missing profile"}), "body: {body}");
    }
}

#[tokio::test]
async fn test_unreadable_bodies_are_server_errors() {
    for raw in ["{not json", "", "null"] {
        let response: Value = AxumTestRequest::post(BMR)
            .raw_json(raw)
            .send(common::test_router())
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
            .json();
        assert_eq!(response, json!({"error": "server error"}), "body: {raw:?}");
    }
}

#[tokio::test]
async fn test_non_string_text_field_is_server_error() {
    let response: Value = AxumTestRequest::post(BMR)
        .json(&json!({"profile": {"age": 30, "height_cm": 180, "weight_kg": 80, "sex": 1}}))
        .send(common::test_router())
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .json();
    assert_eq!(response, json!({"error": "server error"}));
}

#[tokio::test]
async fn test_get_is_not_allowed() {
    let response = AxumTestRequest::get(BMR).send(common::test_router()).await;
    assert_eq!(response.status(), 405);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let response = AxumTestRequest::post("/api/tdee")
        .json(&json!({}))
        .send(common::test_router())
        .await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let config = ServerConfig {
        max_request_body_bytes: 16,
        ..ServerConfig::default()
    };
    let raw = r#"{"profile":{"age":30,"height_cm":180,"weight_kg":80}}"#;
    let response = AxumTestRequest::post(BMR)
        .header("content-length", &raw.len().to_string())
        .raw_json(raw)
        .send(common::test_router_with(&config))
        .await;
    assert_eq!(response.status(), 413);
}

// ============================================================================
// MIDDLEWARE
// ============================================================================

#[tokio::test]
async fn test_request_id_is_generated() {
    let response = AxumTestRequest::post(BMR)
        .json(&json!({}))
        .send(common::test_router())
        .await;

    let request_id = response.header("x-request-id").expect("request id header");
    assert!(uuid::Uuid::parse_str(request_id).is_ok());
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let response = AxumTestRequest::get("/health")
        .header("x-request-id", "trace-abc-123")
        .send(common::test_router())
        .await;

    assert_eq!(response.header("x-request-id"), Some("trace-abc-123"));
}

#[tokio::test]
async fn test_cors_preflight_allows_post() {
    let response = AxumTestRequest::new(Method::OPTIONS, BMR)
        .header("origin", "https://app.example.com")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .send(common::test_router())
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
}

#[tokio::test]
async fn test_cors_origin_list_is_enforced() {
    let config = ServerConfig {
        cors_allowed_origins: "https://app.example.com".into(),
        ..ServerConfig::default()
    };

    let allowed = AxumTestRequest::post(BMR)
        .header("origin", "https://app.example.com")
        .json(&json!({}))
        .send(common::test_router_with(&config))
        .await;
    assert_eq!(
        allowed.header("access-control-allow-origin"),
        Some("https://app.example.com")
    );

    let denied = AxumTestRequest::post(BMR)
        .header("origin", "https://evil.example.com")
        .json(&json!({}))
        .send(common::test_router_with(&config))
        .await;
    assert_eq!(denied.header("access-control-allow-origin"), None);
}

// ============================================================================
// HEALTH
// ============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let body: Value = AxumTestRequest::get("/health")
        .send(common::test_router())
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "pierre-energy-server");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_ready_endpoint() {
    let body: Value = AxumTestRequest::get("/ready")
        .send(common::test_router())
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["status"], "ready");
}
