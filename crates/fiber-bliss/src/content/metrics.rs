use serde::Serialize;

use super::domain::{BusinessProfile, JobCatalog};

/// Figures computed from the static content rather than stored with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DerivedMetrics {
    pub current_year: i32,
    pub years_in_business: u32,
    pub total_openings: usize,
    pub urgent_openings: usize,
}

impl DerivedMetrics {
    /// `current_year` is supplied by the caller so the result only depends on its inputs.
    pub fn compute(profile: &BusinessProfile, jobs: &JobCatalog, current_year: i32) -> Self {
        Self {
            current_year,
            years_in_business: years_between(profile.founded_year, current_year),
            total_openings: jobs.listings().count(),
            urgent_openings: jobs.listings().filter(|listing| listing.urgent).count(),
        }
    }
}

fn years_between(founded_year: i32, current_year: i32) -> u32 {
    u32::try_from(current_year.saturating_sub(founded_year)).unwrap_or(0)
}
