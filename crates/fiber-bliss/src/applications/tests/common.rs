use chrono::NaiveDate;

use crate::applications::domain::{ApplicationId, ApplicationRecord, ApplicationStatus};
use crate::applications::SampleApplications;

pub(super) use crate::test_support::{read_json_body, OfflineDirectory};

pub(super) fn samples() -> SampleApplications {
    SampleApplications::generate().expect("sample set builds")
}

pub(super) fn record(id: &str, status: ApplicationStatus) -> ApplicationRecord {
    ApplicationRecord {
        application_id: ApplicationId(id.to_string()),
        applicant_name: "Zanele K.",
        position: "Lead Crochet Artisan",
        status,
        applied_date: NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date"),
    }
}
