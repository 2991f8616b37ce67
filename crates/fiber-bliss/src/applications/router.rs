use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use super::directory::ApplicationDirectory;
use super::lookup::{lookup_application, LookupOutcome};

/// Router exposing the applicant status tracker.
pub fn application_router<D>(directory: Arc<D>) -> Router
where
    D: ApplicationDirectory + 'static,
{
    Router::new()
        .route(
            "/api/v1/careers/applications/:application_id",
            get(status_handler::<D>),
        )
        .with_state(directory)
}

pub(crate) async fn status_handler<D>(
    State(directory): State<Arc<D>>,
    Path(application_id): Path<String>,
) -> Response
where
    D: ApplicationDirectory + 'static,
{
    match lookup_application(directory.as_ref(), &application_id) {
        Ok(outcome @ LookupOutcome::Found { .. }) => {
            (StatusCode::OK, axum::Json(outcome)).into_response()
        }
        Ok(outcome) => (StatusCode::NOT_FOUND, axum::Json(outcome)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
    }
}
