//! Applicant status tracker over a fixed sample of applications.
//!
//! There is no intake pipeline behind these records: they are illustrative
//! rows generated at startup and never change while the process runs.

pub mod directory;
pub mod domain;
pub mod lookup;
pub mod router;

#[cfg(test)]
mod tests;

pub use directory::{ApplicationDirectory, DirectoryError, SampleApplications};
pub use domain::{
    ApplicationId, ApplicationRecord, ApplicationStatistics, ApplicationStatus,
    ApplicationStatusView,
};
pub use lookup::{lookup_application, LookupOutcome, NOT_FOUND_MESSAGE};
pub use router::application_router;
