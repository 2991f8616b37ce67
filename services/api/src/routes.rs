use crate::infra::{AppState, Pages};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use fiber_bliss::applications::application_router;
use fiber_bliss::pages::{careers_router, showcase_router};
use serde_json::json;

pub(crate) fn with_page_routes(pages: &Pages) -> axum::Router {
    showcase_router(pages.showcase.clone())
        .merge(careers_router(pages.careers.clone()))
        .merge(application_router(pages.directory.clone()))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::build_pages;
    use axum::body::Body;
    use axum::http::Request;
    use fiber_bliss::config::{ContentConfig, SessionConfig};
    use fiber_bliss::pages::InMemorySessionStore;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    fn state(ready: bool) -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        }
    }

    fn app(state: AppState) -> axum::Router {
        app_with_sessions(state, Arc::default())
    }

    fn app_with_sessions(state: AppState, sessions: Arc<InMemorySessionStore>) -> axum::Router {
        let pages = build_pages(&ContentConfig::default(), sessions).expect("pages build");
        with_page_routes(&pages).layer(Extension(state))
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    #[tokio::test]
    async fn readiness_reports_initializing_until_flag_is_set() {
        let state = state(false);
        let response = app(state.clone())
            .oneshot(
                Request::get("/ready")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json_body(response).await["status"], json!("initializing"));

        state.readiness.store(true, Ordering::Release);
        let response = app(state)
            .oneshot(
                Request::get("/ready")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn health_is_always_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], json!("ok"));
    }

    #[tokio::test]
    async fn metrics_are_plain_text() {
        let response = app(state(true))
            .oneshot(
                Request::get("/metrics")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).map(|v| v.as_bytes()),
            Some(b"text/plain; version=0.0.4".as_slice())
        );
    }

    #[tokio::test]
    async fn page_routes_are_mounted() {
        for uri in [
            "/api/v1/showcase",
            "/api/v1/careers",
            "/api/v1/careers/views/about",
            "/api/v1/careers/applications/KFB-APP1004",
        ] {
            let response = app(state(true))
                .oneshot(Request::get(uri).body(Body::empty()).expect("request builds"))
                .await
                .expect("route executes");
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
        }
    }

    #[tokio::test]
    async fn anonymous_view_requests_stay_within_session_cap() {
        let sessions = Arc::new(InMemorySessionStore::new(SessionConfig {
            max_entries: 50,
            idle_timeout: Duration::from_secs(600),
        }));
        let app = app_with_sessions(state(true), sessions.clone());

        for _ in 0..500 {
            let response = app
                .clone()
                .oneshot(
                    Request::get("/api/v1/careers/views/about")
                        .body(Body::empty())
                        .expect("request builds"),
                )
                .await
                .expect("route executes");
            assert_eq!(response.status(), StatusCode::OK);
        }

        assert!(sessions.len() <= 50, "len = {}", sessions.len());
    }
}
