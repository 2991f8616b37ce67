use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::{portal, read_json_body};
use crate::content::{StaticContentStore, DEFAULT_HERO_IMAGE_URL};
use crate::pages::router::{careers_router, showcase_router, SESSION_HEADER};
use crate::pages::showcase::ShowcasePage;

fn showcase() -> Arc<ShowcasePage> {
    Arc::new(ShowcasePage::new(
        Arc::new(StaticContentStore::new()),
        DEFAULT_HERO_IMAGE_URL,
    ))
}

fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

#[tokio::test]
async fn showcase_route_returns_page() {
    let response = showcase_router(showcase())
        .oneshot(
            Request::get("/api/v1/showcase")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["title"], json!("Kwazi's Fiber Bliss"));
    assert_eq!(payload["hero"]["kind"], json!("image"));
    assert!(payload.get("navigation").is_none());
}

#[tokio::test]
async fn inquiry_route_acknowledges_submission() {
    let response = showcase_router(showcase())
        .oneshot(json_post(
            "/api/v1/showcase/inquiries",
            json!({
                "name": "Ayanda",
                "email": "ayanda@example.com",
                "product_interest": "handbags",
                "message": "Do you ship to Durban?"
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["acknowledgment"]["outcome"], json!("success"));
    assert_eq!(
        payload["acknowledgment"]["message"],
        json!("Thank you Ayanda! We'll contact you soon.")
    );
}

#[tokio::test]
async fn incomplete_inquiry_gets_warning_not_error() {
    let response = showcase_router(showcase())
        .oneshot(json_post(
            "/api/v1/showcase/inquiries",
            json!({ "name": "Ayanda" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload["acknowledgment"]["outcome"],
        json!("validation_warning")
    );
    assert_eq!(
        payload["acknowledgment"]["message"],
        json!("Please fill in all fields.")
    );
}

#[tokio::test]
async fn careers_route_issues_session_header() {
    let response = careers_router(portal())
        .oneshot(
            Request::get("/api/v1/careers")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let issued = response
        .headers()
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .expect("session header issued");
    assert!(!issued.is_empty());

    let payload = read_json_body(response).await;
    assert_eq!(
        payload["sections"][0]["heading"],
        json!("Join Kwazi's Fiber Bliss")
    );
}

#[tokio::test]
async fn selected_view_persists_for_the_same_session() {
    let portal = portal();

    let response = careers_router(portal.clone())
        .oneshot(
            Request::get("/api/v1/careers/views/our-team")
                .header(SESSION_HEADER, "visitor-1")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(SESSION_HEADER)
            .and_then(|value| value.to_str().ok()),
        Some("visitor-1")
    );

    let again = careers_router(portal.clone())
        .oneshot(
            Request::get("/api/v1/careers")
                .header(SESSION_HEADER, "visitor-1")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    let payload = read_json_body(again).await;
    assert_eq!(payload["sections"][0]["heading"], json!("Meet Our Team"));

    let other = careers_router(portal)
        .oneshot(
            Request::get("/api/v1/careers")
                .header(SESSION_HEADER, "visitor-2")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    let payload = read_json_body(other).await;
    assert_eq!(
        payload["sections"][0]["heading"],
        json!("Join Kwazi's Fiber Bliss")
    );
}

#[tokio::test]
async fn unknown_view_is_rejected() {
    let response = careers_router(portal())
        .oneshot(
            Request::get("/api/v1/careers/views/backstage")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn applications_view_runs_lookup_from_query() {
    let response = careers_router(portal())
        .oneshot(
            Request::get("/api/v1/careers/views/applications?application_id=KFB-APP1002")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let rendered = payload["sections"][0].to_string();
    assert!(rendered.contains("Emma R."));
    assert!(rendered.contains("Junior Assistant"));
}

#[tokio::test]
async fn apply_route_returns_notice_and_keeps_view() {
    let response = careers_router(portal())
        .oneshot(
            Request::post("/api/v1/careers/jobs/lead-crochet-artisan/apply")
                .header(SESSION_HEADER, "visitor-3")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["job_title"], json!("Lead Crochet Artisan"));
    assert_eq!(payload["notice"]["level"], json!("info"));
    assert_eq!(payload["session"]["view"], json!("welcome"));
    assert_eq!(
        payload["session"]["selected_job"],
        json!("Lead Crochet Artisan")
    );
}

#[tokio::test]
async fn apply_route_reports_unknown_job() {
    let response = careers_router(portal())
        .oneshot(
            Request::post("/api/v1/careers/jobs/yarn-sommelier/apply")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .contains("yarn-sommelier"));
}

#[tokio::test]
async fn application_form_route_acknowledges() {
    let response = careers_router(portal())
        .oneshot(json_post(
            "/api/v1/careers/applications",
            json!({
                "full_name": "Thandi",
                "email": "t@example.com",
                "phone": "0820000000",
                "location": "Empangeni",
                "position": "Lead Crochet Artisan",
                "resume": "cv.PDF"
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["acknowledgment"]["outcome"], json!("success"));
    assert_eq!(
        payload["acknowledgment"]["message"],
        json!("Thank you Thandi! Your application for Lead Crochet Artisan has been submitted.")
    );
}

#[tokio::test]
async fn application_form_rejects_unsupported_resume() {
    let response = careers_router(portal())
        .oneshot(json_post(
            "/api/v1/careers/applications",
            json!({ "full_name": "Thandi", "resume": "cv.exe" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn application_form_rejects_position_outside_catalog() {
    let response = careers_router(portal())
        .oneshot(json_post(
            "/api/v1/careers/applications",
            json!({
                "full_name": "Thandi",
                "email": "t@example.com",
                "phone": "0820000000",
                "location": "Empangeni",
                "position": "Astronaut"
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload["acknowledgment"]["outcome"],
        json!("validation_warning")
    );
    assert!(!payload.to_string().contains("Astronaut"));
}
