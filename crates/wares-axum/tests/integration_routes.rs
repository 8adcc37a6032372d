//! End-to-end tests over the assembled router.
//!
//! Each test drives the real route tree with `tower::oneshot` and checks
//! the HTTP contract: status codes, JSON body shapes, and headers.

use std::path::PathBuf;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use wares_axum::bootstrap::{RateLimitConfig, ServerConfig, bootstrap};
use wares_axum::routes::{create_router, create_spa_router};

/// Helper to create a test config backed by a temp data file.
fn test_config(data_file: PathBuf) -> ServerConfig {
    ServerConfig::new(0, data_file)
}

fn test_app(temp: &TempDir) -> axum::Router {
    let config = test_config(temp.path().join("items.json"));
    let ctx = bootstrap(&config).unwrap();
    create_router(ctx, &config)
}

async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn post_item_request(json: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/items")
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

#[tokio::test]
async fn health_endpoint_returns_ok_with_fields() {
    let temp = TempDir::new().unwrap();
    let app = test_app(&temp);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains(r#""status":"OK""#), "got: {body}");
    assert!(body.contains("timestamp"));
    assert!(body.contains("uptime"));
    assert!(body.contains(r#""environment":"development""#));
}

#[tokio::test]
async fn items_endpoint_returns_empty_page() {
    let temp = TempDir::new().unwrap();
    let app = test_app(&temp);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/items")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains(r#""items":[]"#), "got: {body}");
    assert!(body.contains(r#""total":0"#));
    assert!(body.contains(r#""hasNextPage":false"#));
    assert!(!body.contains("searchQuery"));
}

#[tokio::test]
async fn create_item_returns_201_and_item_is_listed() {
    let temp = TempDir::new().unwrap();
    let app = test_app(&temp);

    let response = app
        .clone()
        .oneshot(post_item_request(
            r#"{"name":"Widget","category":"Tools","price":9.99}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_string(response).await;
    assert!(body.contains(r#""message":"Item created successfully""#));
    assert!(body.contains(r#""name":"Widget""#));
    assert!(body.contains(r#""id":1"#));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/items")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains(r#""name":"Widget""#));
    assert!(body.contains(r#""total":1"#));
}

#[tokio::test]
async fn search_filters_and_echoes_the_term() {
    let temp = TempDir::new().unwrap();
    let app = test_app(&temp);

    for json in [
        r#"{"name":"Widget","category":"Tools","price":9.99}"#,
        r#"{"name":"Notebook","category":"Stationery","price":2.5}"#,
    ] {
        let response = app.clone().oneshot(post_item_request(json)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/items?q=widget")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains(r#""name":"Widget""#), "got: {body}");
    assert!(!body.contains("Notebook"));
    assert!(body.contains(r#""total":1"#));
    assert!(body.contains(r#""searchQuery":"widget""#));
}

#[tokio::test]
async fn get_item_by_id_roundtrip() {
    let temp = TempDir::new().unwrap();
    let app = test_app(&temp);

    let response = app
        .clone()
        .oneshot(post_item_request(
            r#"{"name":"Widget","category":"Tools","price":9.99}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/items/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains(r#""name":"Widget""#));
    assert!(body.contains(r#""category":"Tools""#));
}

#[tokio::test]
async fn missing_item_returns_json_404() {
    let temp = TempDir::new().unwrap();
    let app = test_app(&temp);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/items/999999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_string(response).await, r#"{"error":"Item not found"}"#);
}

#[tokio::test]
async fn out_of_range_query_params_are_rejected() {
    let temp = TempDir::new().unwrap();
    let app = test_app(&temp);

    for uri in [
        "/api/items?limit=999",
        "/api/items?limit=0",
        "/api/items?page=0",
        "/api/items?page=abc",
        "/api/items?page=-1",
    ] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri: {uri}");
        assert_eq!(
            body_string(response).await,
            r#"{"error":"Validation failed"}"#,
            "uri: {uri}"
        );
    }
}

#[tokio::test]
async fn bad_item_ids_are_rejected() {
    let temp = TempDir::new().unwrap();
    let app = test_app(&temp);

    for uri in ["/api/items/abc", "/api/items/0", "/api/items/1.5"] {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri: {uri}");
        assert_eq!(
            body_string(response).await,
            r#"{"error":"Validation failed"}"#,
            "uri: {uri}"
        );
    }
}

#[tokio::test]
async fn invalid_create_bodies_are_rejected() {
    let temp = TempDir::new().unwrap();
    let app = test_app(&temp);

    // Blank name, oversized category, negative price, missing field, junk
    let long_category = format!(r#"{{"name":"X","category":"{}","price":1.0}}"#, "c".repeat(51));
    let bodies = [
        r#"{"name":"   ","category":"Tools","price":1.0}"#,
        long_category.as_str(),
        r#"{"name":"X","category":"Tools","price":-1.0}"#,
        r#"{"name":"X","category":"Tools"}"#,
        r#"not json"#,
    ];

    for json in bodies {
        let response = app.clone().oneshot(post_item_request(json)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {json}");
        assert_eq!(
            body_string(response).await,
            r#"{"error":"Validation failed"}"#,
            "body: {json}"
        );
    }

    // Nothing was persisted
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/items")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(body_string(response).await.contains(r#""total":0"#));
}

#[tokio::test]
async fn unknown_api_route_returns_json_404() {
    let temp = TempDir::new().unwrap();
    let app = test_app(&temp);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_string(response).await,
        r#"{"error":"API endpoint not found"}"#
    );
}

#[tokio::test]
async fn stats_report_cache_provenance() {
    let temp = TempDir::new().unwrap();
    let app = test_app(&temp);

    let response = app
        .clone()
        .oneshot(post_item_request(
            r#"{"name":"Widget","category":"Tools","price":10.0}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // First read computes
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains(r#""total":1"#), "got: {body}");
    assert!(body.contains(r#""averagePrice":10.0"#));
    assert!(body.contains(r#""cached":false"#));
    assert!(!body.contains("cacheAge"));

    // Second read is a cache hit
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/stats")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = body_string(response).await;
    assert!(body.contains(r#""cached":true"#), "got: {body}");
    assert!(body.contains(r#""cacheAge":"#));

    // Refresh bypasses the cache
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/stats/refresh")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains(r#""message":"Cache refreshed""#));
    assert!(body.contains(r#""cached":false"#));
}

#[tokio::test]
async fn requests_past_quota_get_429_but_health_stays_up() {
    let temp = TempDir::new().unwrap();
    let config = test_config(temp.path().join("items.json")).with_rate_limit(RateLimitConfig {
        max_requests: 3,
        window: Duration::from_secs(60),
    });
    let ctx = bootstrap(&config).unwrap();
    let app = create_router(ctx, &config);

    for _ in 0..3 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/items")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/items")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(
        body_string(response).await,
        r#"{"error":"Too many requests, please try again later."}"#
    );

    // The health probe sits outside the limited router
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn spa_fallback_returns_index_html() {
    use std::io::Write;

    let temp = TempDir::new().unwrap();
    let config = test_config(temp.path().join("items.json"));
    let ctx = bootstrap(&config).unwrap();

    // Create a static dir with an index.html (SPA fallback target)
    let static_dir = TempDir::new().unwrap();
    let index_path = static_dir.path().join("index.html");
    let mut file = std::fs::File::create(&index_path).unwrap();
    write!(file, "<!DOCTYPE html><html><body>catalog shell</body></html>").unwrap();

    let app = create_spa_router(ctx, static_dir.path(), &config);

    // A path outside /api has no route of its own and should fall back
    let response = app
        .oneshot(
            Request::builder()
                .uri("/some/client/route")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get("content-type")
            .map(|v| v.to_str().unwrap_or("").contains("text/html"))
            .unwrap_or(false)
    );

    let body = body_string(response).await;
    assert!(body.contains("catalog shell"));
}

/// Regression test: unknown API paths should NOT be intercepted by the
/// SPA fallback (which would return HTML instead of the JSON 404).
#[tokio::test]
async fn api_404_not_intercepted_by_spa_fallback() {
    use std::io::Write;

    let temp = TempDir::new().unwrap();
    let config = test_config(temp.path().join("items.json"));
    let ctx = bootstrap(&config).unwrap();

    let static_dir = TempDir::new().unwrap();
    let index_path = static_dir.path().join("index.html");
    let mut file = std::fs::File::create(&index_path).unwrap();
    write!(file, "<!DOCTYPE html><html><body>catalog shell</body></html>").unwrap();

    let app = create_spa_router(ctx, static_dir.path(), &config);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_string(response).await,
        r#"{"error":"API endpoint not found"}"#
    );
}
