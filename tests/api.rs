//! HTTP API tests
//!
//! Drive the router in-process through the full two-step flow.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use secureflow::{config::Config, create_router, AppState};

const SIZE: u32 = 300;

fn app_with(pairs: &'static [(&'static str, &'static str)]) -> Router {
    let config = Config::from_lookup(|key| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    });
    create_router(AppState::new(config))
}

/// Gate disabled so identity passes immediately
fn app() -> Router {
    app_with(&[("MIN_FILL_SECONDS", "0")])
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

/// RGBA canvas, white background, black wherever `inside` holds
fn canvas(inside: impl Fn(i64, i64) -> bool) -> Vec<u8> {
    let mut pixels = Vec::with_capacity((SIZE * SIZE * 4) as usize);
    for y in 0..SIZE as i64 {
        for x in 0..SIZE as i64 {
            let v = if inside(x, y) { 0 } else { 255 };
            pixels.extend_from_slice(&[v, v, v, 255]);
        }
    }
    pixels
}

/// Arrow with a thin shaft and a filled head pointing to `direction`
fn arrow(direction: &str) -> Value {
    let last = SIZE as i64 - 1;
    let direction = direction.to_string();
    let pixels = canvas(move |x, y| {
        let (u, v) = match direction.as_str() {
            "Right" => (x, y),
            "Left" => (last - x, y),
            "Down" => (y, x),
            _ => (last - y, x),
        };
        let shaft = (40..=200).contains(&u) && (143..=157).contains(&v);
        let head = (200..=260).contains(&u) && (v - 150).abs() <= 260 - u;
        shaft || head
    });
    json!({ "width": SIZE, "height": SIZE, "channels": 4, "pixels": pixels })
}

fn identity() -> Value {
    json!({ "name": "Alan Turing", "email": "alan@example.com", "phone": "555-0142" })
}

async fn create_session(app: &Router) -> (String, String) {
    let (status, body) = send(app, "POST", "/api/v1/challenges", None).await;
    assert_eq!(status, StatusCode::CREATED);
    (
        body["id"].as_str().unwrap().to_string(),
        body["target"].as_str().unwrap().to_string(),
    )
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["active_sessions"], 0);
}

#[tokio::test]
async fn test_full_flow_unlocks() {
    let app = app();
    let (id, target) = create_session(&app).await;

    let (status, view) = send(&app, "GET", &format!("/api/v1/challenges/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["step"], "Behavioral");
    assert_eq!(view["progress"], 0);
    assert_eq!(view["instruction"], format!("Draw an Arrow pointing {}", target));

    let (status, gate) = send(
        &app,
        "POST",
        &format!("/api/v1/challenges/{}/identity", id),
        Some(identity()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(gate["passed"], true);
    assert_eq!(gate["message"], "Behavioral Match Verified.");
    assert_eq!(gate["step"], "Cognitive");

    let (status, result) = send(
        &app,
        "POST",
        &format!("/api/v1/challenges/{}/drawing", id),
        Some(json!({ "drawing": arrow(&target) })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["kind"], "Match");
    assert_eq!(result["is_match"], true);
    assert_eq!(result["detected"], target.as_str());
    assert_eq!(result["unlocked"], true);
    assert_eq!(result["step"], "Unlocked");
    assert_eq!(result["attempts"], 1);
    assert_eq!(result["hint"], "SYSTEM UNLOCKED. You may proceed.");
}

#[tokio::test]
async fn test_missing_drawing_keeps_session_open() {
    let app = app();
    let (id, _) = create_session(&app).await;
    send(&app, "POST", &format!("/api/v1/challenges/{}/identity", id), Some(identity())).await;

    let (status, result) = send(
        &app,
        "POST",
        &format!("/api/v1/challenges/{}/drawing", id),
        Some(json!({ "drawing": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["kind"], "NoDrawing");
    assert_eq!(result["message"], "No drawing detected.");
    assert_eq!(result["step"], "Cognitive");
    assert_eq!(result["unlocked"], false);
    assert_eq!(
        result["hint"],
        "Tip: Draw the arrow head clearly so we know which way it points."
    );
}

#[tokio::test]
async fn test_empty_identity_fields() {
    let app = app();
    let (id, _) = create_session(&app).await;

    let (status, gate) = send(
        &app,
        "POST",
        &format!("/api/v1/challenges/{}/identity", id),
        Some(json!({ "name": "Alan", "email": "", "phone": "555" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(gate["outcome"], "MissingFields");
    assert_eq!(gate["step"], "Behavioral");
}

#[tokio::test]
async fn test_identity_submitted_too_fast() {
    let app = app_with(&[("MIN_FILL_SECONDS", "3600")]);
    let (id, _) = create_session(&app).await;

    let (status, gate) = send(
        &app,
        "POST",
        &format!("/api/v1/challenges/{}/identity", id),
        Some(identity()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(gate["outcome"], "TooFast");
    assert_eq!(gate["message"], "Suspicious activity (Too fast). Try again.");
    assert_eq!(gate["passed"], false);
}

#[tokio::test]
async fn test_overlong_identity_field_rejected() {
    let app = app();
    let (id, _) = create_session(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/v1/challenges/{}/identity", id),
        Some(json!({ "name": "x", "email": "y", "phone": "5".repeat(64) })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_drawing_before_identity_conflicts() {
    let app = app();
    let (id, _) = create_session(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/v1/challenges/{}/drawing", id),
        Some(json!({ "drawing": null })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], 409);
}

#[tokio::test]
async fn test_unknown_session() {
    let app = app();
    let uri = format!("/api/v1/challenges/{}", uuid::Uuid::new_v4());
    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Challenge session not found");
}

#[tokio::test]
async fn test_reset_and_delete() {
    let app = app();
    let (id, _) = create_session(&app).await;
    send(&app, "POST", &format!("/api/v1/challenges/{}/identity", id), Some(identity())).await;

    let (status, view) = send(&app, "POST", &format!("/api/v1/challenges/{}/reset", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["step"], "Behavioral");
    assert_eq!(view["attempts"], 0);

    let (status, _) = send(&app, "DELETE", &format!("/api/v1/challenges/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", &format!("/api/v1/challenges/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_stateless_classify_mismatch() {
    let app = app();
    let (status, result) = send(
        &app,
        "POST",
        "/api/v1/classify",
        Some(json!({ "target": "Up", "drawing": arrow("Right") })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["kind"], "Mismatch");
    assert_eq!(result["detected"], "Right");
    assert_eq!(result["message"], "Error: You drew Right, but we expected Up.");
}

#[tokio::test]
async fn test_stateless_classify_blank_canvas() {
    let app = app();
    let blank = json!({ "width": SIZE, "height": SIZE, "channels": 4, "pixels": canvas(|_, _| false) });
    let (status, result) = send(
        &app,
        "POST",
        "/api/v1/classify",
        Some(json!({ "target": "Left", "drawing": blank })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["kind"], "EmptyCanvas");
    assert_eq!(result["detected"], Value::Null);
}

#[tokio::test]
async fn test_stateless_classify_rejects_bad_input() {
    let app = app();

    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/classify",
        Some(json!({ "target": "Unknown", "drawing": null })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/classify",
        Some(json!({
            "target": "Left",
            "drawing": { "width": 2, "height": 2, "channels": 2, "pixels": [0, 0, 0, 0, 0, 0, 0, 0] }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("channel"));
}

#[tokio::test]
async fn test_canvas_size_limit() {
    // Body limit kept large so the pixel check, not the body check, refuses it
    let app = app_with(&[("MAX_CANVAS_PIXELS", "1000"), ("MAX_BODY_BYTES", "8000000")]);
    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/classify",
        Some(json!({ "target": "Right", "drawing": arrow("Right") })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_canvas_at_pixel_limit_fits_body_limit() {
    // 500x500 = 250000 pixels; every channel serializes as "255," (worst case)
    let app = app_with(&[("MIN_FILL_SECONDS", "0"), ("MAX_CANVAS_PIXELS", "250000")]);
    let side: u32 = 500;
    let pixels = vec![255u8; (side * side * 4) as usize];
    let blank = json!({ "width": side, "height": side, "channels": 4, "pixels": pixels });

    let (status, result) = send(
        &app,
        "POST",
        "/api/v1/classify",
        Some(json!({ "target": "Up", "drawing": blank })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["kind"], "EmptyCanvas");
}
