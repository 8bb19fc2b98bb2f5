use super::common::*;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

fn analyze_request(body: serde_json::Value) -> Request<axum::body::Body> {
    Request::post("/api/v1/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(&body).expect("serialize body"),
        ))
        .expect("build request")
}

#[tokio::test]
async fn analyze_route_returns_report() {
    let response = router()
        .oneshot(analyze_request(json!({
            "ingredients": "Fragrance, Parfum",
            "skin_focus": "sensitive",
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["verdict"], "Avoid");
    assert_eq!(payload["score"], 40);
    assert_eq!(payload["skin_focus"], "sensitive");
    assert_eq!(payload["parsed_ingredients"], json!(["fragrance", "parfum"]));
    assert_eq!(payload["summary"]["irritant"], 2);
    assert_eq!(payload["findings"][0]["note"], "Fragrance can irritate sensitive skin.");
}

#[tokio::test]
async fn analyze_route_omits_unrecognized_focus() {
    let response = router()
        .oneshot(analyze_request(json!({
            "ingredients": "Glycerin",
            "skin_focus": "combination",
        })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert!(payload.get("skin_focus").is_none());
    assert_eq!(payload["verdict"], "Safe");
}

#[tokio::test]
async fn analyze_route_rejects_blank_ingredients() {
    let response = router()
        .oneshot(analyze_request(json!({ "ingredients": "   " })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["error"], "Please paste product ingredients.");
}

#[tokio::test]
async fn analyze_route_treats_missing_field_as_blank() {
    let response = router()
        .oneshot(analyze_request(json!({})))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
