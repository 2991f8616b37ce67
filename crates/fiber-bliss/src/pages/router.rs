use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::careers::{CareersPortal, CareersView, PortalError, RenderRequest};
use super::current_year;
use super::session::{SessionId, SessionStore};
use super::showcase::ShowcasePage;
use crate::applications::ApplicationDirectory;
use crate::forms::{Acknowledgment, InquirySubmission, JobApplicationSubmission};

/// Header carrying the visitor's session id in both directions.
pub const SESSION_HEADER: &str = "x-session-id";

const MAX_SESSION_ID_LEN: usize = 128;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ViewQuery {
    #[serde(default)]
    pub(crate) application_id: Option<String>,
}

#[derive(Debug, Serialize)]
struct SubmissionResponse {
    acknowledgment: Acknowledgment,
}

/// Session id sent by the client, or a fresh one when none was usable.
pub(crate) fn session_from_headers(headers: &HeaderMap) -> SessionId {
    headers
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty() && value.len() <= MAX_SESSION_ID_LEN)
        .map(|value| SessionId(value.to_string()))
        .unwrap_or_else(SessionId::generate)
}

fn with_session<T: Serialize>(status: StatusCode, session: SessionId, body: T) -> Response {
    (status, [(SESSION_HEADER, session.0)], Json(body)).into_response()
}

fn portal_error(error: PortalError) -> Response {
    let status = match error {
        PortalError::UnknownJob(_) => StatusCode::NOT_FOUND,
        PortalError::Session(_) | PortalError::Directory(_) => StatusCode::SERVICE_UNAVAILABLE,
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, Json(payload)).into_response()
}

/// Router for the single-page product showcase.
pub fn showcase_router(page: Arc<ShowcasePage>) -> Router {
    Router::new()
        .route("/api/v1/showcase", get(showcase_handler))
        .route("/api/v1/showcase/inquiries", post(inquiry_handler))
        .with_state(page)
}

pub(crate) async fn showcase_handler(State(page): State<Arc<ShowcasePage>>) -> Response {
    (StatusCode::OK, Json(page.render(current_year()))).into_response()
}

pub(crate) async fn inquiry_handler(
    State(page): State<Arc<ShowcasePage>>,
    Json(submission): Json<InquirySubmission>,
) -> Response {
    let acknowledgment = page.submit_inquiry(&submission);
    (StatusCode::OK, Json(SubmissionResponse { acknowledgment })).into_response()
}

/// Router for the careers portal. Every route reads and echoes [`SESSION_HEADER`].
pub fn careers_router<S, D>(portal: Arc<CareersPortal<S, D>>) -> Router
where
    S: SessionStore + 'static,
    D: ApplicationDirectory + 'static,
{
    Router::new()
        .route("/api/v1/careers", get(current_view_handler::<S, D>))
        .route("/api/v1/careers/views/:view", get(select_view_handler::<S, D>))
        .route(
            "/api/v1/careers/jobs/:title/apply",
            post(apply_handler::<S, D>),
        )
        .route(
            "/api/v1/careers/applications",
            post(application_form_handler::<S, D>),
        )
        .with_state(portal)
}

pub(crate) async fn current_view_handler<S, D>(
    State(portal): State<Arc<CareersPortal<S, D>>>,
    headers: HeaderMap,
    Query(query): Query<ViewQuery>,
) -> Response
where
    S: SessionStore + 'static,
    D: ApplicationDirectory + 'static,
{
    let session = session_from_headers(&headers);
    let request = RenderRequest {
        application_id: query.application_id,
    };
    match portal.render(&session, &request, current_year()) {
        Ok(page) => with_session(StatusCode::OK, session, page),
        Err(error) => portal_error(error),
    }
}

pub(crate) async fn select_view_handler<S, D>(
    State(portal): State<Arc<CareersPortal<S, D>>>,
    headers: HeaderMap,
    Path(raw_view): Path<String>,
    Query(query): Query<ViewQuery>,
) -> Response
where
    S: SessionStore + 'static,
    D: ApplicationDirectory + 'static,
{
    let view = match raw_view.parse::<CareersView>() {
        Ok(view) => view,
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };
    let session = session_from_headers(&headers);
    let request = RenderRequest {
        application_id: query.application_id,
    };
    let rendered = portal
        .select_view(&session, view)
        .and_then(|state| portal.render_view(state.view, &request, current_year()));
    match rendered {
        Ok(page) => with_session(StatusCode::OK, session, page),
        Err(error) => portal_error(error),
    }
}

pub(crate) async fn apply_handler<S, D>(
    State(portal): State<Arc<CareersPortal<S, D>>>,
    headers: HeaderMap,
    Path(title): Path<String>,
) -> Response
where
    S: SessionStore + 'static,
    D: ApplicationDirectory + 'static,
{
    let session = session_from_headers(&headers);
    match portal.apply_for(&session, &title) {
        Ok(prompt) => with_session(StatusCode::OK, session, prompt),
        Err(error) => portal_error(error),
    }
}

pub(crate) async fn application_form_handler<S, D>(
    State(portal): State<Arc<CareersPortal<S, D>>>,
    Json(submission): Json<JobApplicationSubmission>,
) -> Response
where
    S: SessionStore + 'static,
    D: ApplicationDirectory + 'static,
{
    let acknowledgment = portal.submit_application(&submission);
    (StatusCode::OK, Json(SubmissionResponse { acknowledgment })).into_response()
}
