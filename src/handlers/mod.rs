pub mod products;
pub mod stats;

use axum::{http::StatusCode, Json};
use serde_json::json;

pub const LIVENESS_MESSAGE: &str = "Inventory service is connected to the database!";

pub async fn home() -> &'static str {
    LIVENESS_MESSAGE
}

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok", "service": "inventory-service" })))
}


#[cfg(test)]
mod tests {
    use super::test_support::{body_text, json_body, request, test_app};
    use super::*;
    use axum::http::Method;

    #[tokio::test]
    async fn root_returns_plain_text_liveness() {
        let res = request(&test_app(), Method::GET, "/", None).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_text(res).await, LIVENESS_MESSAGE);
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let res = request(&test_app(), Method::GET, "/health", None).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(json_body(res).await["status"], "ok");
    }

    #[tokio::test]
    async fn cors_allows_any_origin() {
        let app = test_app();
        let req = axum::http::Request::builder()
            .method(Method::GET)
            .uri("/api/stats")
            .header("origin", "http://example.com")
            .body(axum::body::Body::empty())
            .unwrap();
        let res = tower::ServiceExt::oneshot(app, req).await.unwrap();
        assert!(res.headers().contains_key("access-control-allow-origin"));
    }
}
