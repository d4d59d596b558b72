//! Integration tests for the HTTP API.
//!
//! Drives the real router in-process over the in-memory store using
//! `tower::ServiceExt::oneshot` — no network I/O.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use bytes::Bytes;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use qcdocs_api::{AppState, build_router};
use qcdocs_core::config::AppConfig;
use qcdocs_storage::MemoryObjectStore;

fn seeded_store() -> MemoryObjectStore {
    let mut store = MemoryObjectStore::new();
    for key in [
        "1. QC check list/PO2122244/SN001.pdf",
        "1. QC check list/PO2122244/SN002.pdf",
        "2. Photo/1.EEV/PO2122244/SN001.jpg",
        "2. Photo/2.Case controller/PO2122244/SN001.png",
        "2. Photo/3.Showcase photo/PO2122244/SN001.webp",
    ] {
        store.insert(key, Bytes::from_static(b"content"));
    }
    store
}

fn test_app(store: MemoryObjectStore) -> Router {
    let state = AppState::new(Arc::new(AppConfig::default()), Arc::new(store));
    build_router(state)
}

async fn body_json(body: Body) -> Value {
    let bytes = body.collect().await.expect("collect body").to_bytes();
    serde_json::from_slice(&bytes).expect("valid JSON body")
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

#[tokio::test]
async fn test_search_returns_all_four_categories() {
    let app = test_app(seeded_store());

    let response = app
        .oneshot(json_request(
            "POST",
            "/search",
            serde_json::json!({ "poNumber": "PO2122244" }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response.into_body()).await;

    assert_eq!(json["qcCheckList"].as_array().expect("array").len(), 2);
    assert_eq!(json["eevPhotos"].as_array().expect("array").len(), 1);
    assert_eq!(json["caseControllerPhotos"][0]["name"], "SN001.png");
    assert_eq!(
        json["showcasePhotos"][0]["path"],
        "2. Photo/3.Showcase photo/PO2122244/SN001.webp"
    );
}

#[tokio::test]
async fn test_search_with_empty_body_returns_empty_categories() {
    let app = test_app(seeded_store());

    let response = app
        .oneshot(json_request("POST", "/search", serde_json::json!({})))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response.into_body()).await;
    for field in [
        "qcCheckList",
        "eevPhotos",
        "caseControllerPhotos",
        "showcasePhotos",
    ] {
        assert_eq!(json[field].as_array().expect("array").len(), 0, "{field}");
    }
}

#[tokio::test]
async fn test_search_and_filter_over_http() {
    let app = test_app(seeded_store());

    let response = app
        .oneshot(json_request(
            "POST",
            "/search",
            serde_json::json!({ "poNumber": "PO2122244", "snNumber": "SN001" }),
        ))
        .await
        .expect("response");

    let json = body_json(response.into_body()).await;
    let qc = json["qcCheckList"].as_array().expect("array");
    assert_eq!(qc.len(), 1);
    assert_eq!(qc[0]["name"], "SN001.pdf");
}

#[tokio::test]
async fn test_tree_structure_contains_tree_stats_timestamp() {
    let app = test_app(seeded_store());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/tree-structure")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response.into_body()).await;

    assert_eq!(json["stats"]["totalFiles"], 5);
    assert_eq!(json["stats"]["pdfFiles"], 2);
    assert_eq!(json["stats"]["imageFiles"], 3);
    assert!(json["timestamp"].is_string());

    let tree = json["tree"].as_array().expect("array");
    assert_eq!(tree[0]["name"], "1. QC check list");
    assert_eq!(tree[0]["type"], "folder");
    assert_eq!(tree[1]["name"], "2. Photo");
    // Natural order inside "2. Photo": 1.EEV, 2.Case controller, 3.Showcase.
    let photo_children = tree[1]["children"].as_array().expect("array");
    assert_eq!(photo_children[0]["name"], "1.EEV");
    assert_eq!(photo_children[2]["name"], "3.Showcase photo");
}

#[tokio::test]
async fn test_tree_structure_fails_when_listing_fails() {
    let app = test_app(seeded_store().with_listing_failure());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/tree-structure")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response.into_body()).await;
    assert_eq!(json["error"], "STORAGE_ERROR");
    assert!(json["details"].is_string());
}

#[tokio::test]
async fn test_get_file_streams_with_headers() {
    let app = test_app(seeded_store());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/file?path=2.%20Photo%2F1.EEV%2FPO2122244%2FSN001.jpg")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).expect("header"),
        "image/jpeg"
    );
    assert_eq!(
        response
            .headers()
            .get(header::CACHE_CONTROL)
            .expect("header"),
        "public, max-age=3600"
    );

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect")
        .to_bytes();
    assert_eq!(bytes, Bytes::from_static(b"content"));
}

#[tokio::test]
async fn test_get_file_unknown_extension_falls_back_to_stored_type() {
    let mut store = seeded_store();
    store.insert_with_content_type(
        "manuals/guide.bin",
        Bytes::from_static(b"binary"),
        "application/octet-stream",
    );
    let app = test_app(store);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/file?path=manuals%2Fguide.bin")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).expect("header"),
        "application/octet-stream"
    );
}

#[tokio::test]
async fn test_get_file_without_path_is_bad_request() {
    let app = test_app(seeded_store());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/file")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response.into_body()).await;
    assert_eq!(json["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_file_missing_key_is_not_found() {
    let app = test_app(seeded_store());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/file?path=nope.pdf")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_post_file_sets_attachment_disposition() {
    let app = test_app(seeded_store());

    let response = app
        .oneshot(json_request(
            "POST",
            "/file",
            serde_json::json!({ "path": "1. QC check list/PO2122244/SN001.pdf" }),
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .expect("header"),
        "attachment; filename=\"SN001.pdf\""
    );
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).expect("header"),
        "application/pdf"
    );
}

#[tokio::test]
async fn test_post_file_without_path_is_bad_request() {
    let app = test_app(seeded_store());

    // Both an absent field and an empty one fail validation, not parsing.
    for body in [serde_json::json!({}), serde_json::json!({ "path": "" })] {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/file", body))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response.into_body()).await;
        assert_eq!(json["error"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_health() {
    let app = test_app(MemoryObjectStore::new());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response.into_body()).await;
    assert_eq!(json["status"], "ok");
}
