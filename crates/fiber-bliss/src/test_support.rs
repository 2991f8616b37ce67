//! Fixtures shared by the unit test modules.

use axum::response::Response;
use serde_json::Value;

use crate::applications::{ApplicationDirectory, ApplicationId, ApplicationRecord, DirectoryError};

/// Directory whose backend never answers.
pub(crate) struct OfflineDirectory;

impl ApplicationDirectory for OfflineDirectory {
    fn find(&self, _id: &ApplicationId) -> Result<Option<ApplicationRecord>, DirectoryError> {
        Err(DirectoryError::Unavailable("sheet offline".to_string()))
    }

    fn all(&self) -> Result<Vec<ApplicationRecord>, DirectoryError> {
        Err(DirectoryError::Unavailable("sheet offline".to_string()))
    }
}

pub(crate) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
