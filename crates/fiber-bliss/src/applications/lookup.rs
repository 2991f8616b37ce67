use serde::Serialize;

use super::directory::{ApplicationDirectory, DirectoryError};
use super::domain::{ApplicationId, ApplicationStatusView};

pub const NOT_FOUND_MESSAGE: &str = "Application ID not found. Please check and try again.";

/// Result of checking an application id typed by an applicant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LookupOutcome {
    /// Nothing was typed, so no lookup ran.
    Skipped,
    Found { application: ApplicationStatusView },
    NotFound {
        application_id: ApplicationId,
        message: &'static str,
    },
}

/// Case-sensitive exact match of `raw` against the directory.
pub fn lookup_application<D>(directory: &D, raw: &str) -> Result<LookupOutcome, DirectoryError>
where
    D: ApplicationDirectory + ?Sized,
{
    if raw.is_empty() {
        return Ok(LookupOutcome::Skipped);
    }

    let id = ApplicationId(raw.to_string());
    let outcome = match directory.find(&id)? {
        Some(record) => LookupOutcome::Found {
            application: record.status_view(),
        },
        None => LookupOutcome::NotFound {
            application_id: id,
            message: NOT_FOUND_MESSAGE,
        },
    };

    Ok(outcome)
}
