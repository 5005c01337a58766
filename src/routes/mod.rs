//! HTTP route handlers.
//!
//! Dynamic JSON routes (health, load) are marked `no-store` so neither
//! probes nor load results are ever answered by an intermediate cache.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod home;
pub mod stress;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    let home_routes = Router::new().route("/", get(home::index));

    // Health and load - never cached
    let dynamic_routes = Router::new()
        .route("/healthz", get(health::healthz))
        .route("/stress/{n}", get(stress::load))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    Router::new()
        .merge(home_routes)
        .merge(dynamic_routes)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Identity;
    use axum::body::Body;
    use http::{Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(AppState::new(Identity::new("test-host")))
    }

    async fn get_path(path: &str) -> (StatusCode, http::HeaderMap, Vec<u8>) {
        let request = Request::builder().uri(path).body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        (status, headers, body.to_vec())
    }

    async fn get_json(path: &str) -> (StatusCode, serde_json::Value) {
        let (status, _, body) = get_path(path).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_greeting() {
        let (status, headers, body) = get_path("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(headers[http::header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        assert_eq!(
            String::from_utf8(body).unwrap(),
            "Hello from test-host! Welcome to 2bcloud Assignment!"
        );
    }

    #[tokio::test]
    async fn test_health_payload_is_exact() {
        let (status, headers, body) = get_path("/healthz").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[CACHE_CONTROL], CACHE_CONTROL_NO_STORE);
        assert_eq!(
            String::from_utf8(body).unwrap(),
            r#"{"status":"healthy","service":"2bcloud-assignment-app","version":"1.0.0"}"#
        );
    }

    #[tokio::test]
    async fn test_stress_zero() {
        let (status, json) = get_json("/stress/0").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["result"], 0);
        assert!(json["time_taken"].as_f64().unwrap() >= 0.0);
        assert_eq!(json["hostname"], "test-host");
    }

    #[tokio::test]
    async fn test_stress_one() {
        let (status, json) = get_json("/stress/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["result"].as_u64(), Some(333_332_833_333_500_000));
        assert!(json["time_taken"].as_f64().unwrap() >= 0.0);
    }

    #[tokio::test]
    async fn test_stress_negative_is_zero() {
        let (status, json) = get_json("/stress/-3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["result"], 0);
    }

    #[tokio::test]
    async fn test_stress_response_not_cached() {
        let (_, headers, _) = get_path("/stress/0").await;
        assert_eq!(headers[CACHE_CONTROL], CACHE_CONTROL_NO_STORE);
        assert!(headers.contains_key(&crate::middleware::X_REQUEST_ID));
    }

    #[tokio::test]
    async fn test_stress_time_taken_tracks_load() {
        let (_, idle) = get_json("/stress/0").await;
        let (_, heavy) = get_json("/stress/20").await;
        let idle = idle["time_taken"].as_f64().unwrap();
        let heavy = heavy["time_taken"].as_f64().unwrap();
        assert!(heavy > idle, "idle={} heavy={}", idle, heavy);
        assert!(heavy >= 0.001, "heavy={}", heavy);
    }

    #[tokio::test]
    async fn test_stress_non_integer_rejected() {
        for path in ["/stress/abc", "/stress/1.5", "/stress/99999999999999999999"] {
            let (status, _, _) = get_path(path).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", path);
        }
    }

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let (status, _, _) = get_path("/stress").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let (status, _, _) = get_path("/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
