use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::pages::NoticeLevel;

/// Identifier printed on application receipts, e.g. `KFB-APP1001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub String);

impl ApplicationId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    New,
    UnderReview,
    InterviewScheduled,
    Rejected,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::UnderReview => "Under Review",
            Self::InterviewScheduled => "Interview Scheduled",
            Self::Rejected => "Rejected",
        }
    }

    /// Message shown to the applicant next to their record.
    pub const fn explanation(self) -> &'static str {
        match self {
            Self::New => "Your application has been received and is awaiting review.",
            Self::UnderReview => "Your application is being reviewed by our team.",
            Self::InterviewScheduled => "Great news! Check your email for interview details.",
            Self::Rejected => {
                "Thank you for applying. We'll keep your details for future opportunities."
            }
        }
    }

    pub const fn notice_level(self) -> NoticeLevel {
        match self {
            Self::New | Self::UnderReview => NoticeLevel::Info,
            Self::InterviewScheduled => NoticeLevel::Success,
            Self::Rejected => NoticeLevel::Warning,
        }
    }
}

/// Illustrative application row; the tracker only ever displays these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationRecord {
    pub application_id: ApplicationId,
    pub applicant_name: &'static str,
    pub position: &'static str,
    pub status: ApplicationStatus,
    pub applied_date: NaiveDate,
}

impl ApplicationRecord {
    pub fn applied_date_label(&self) -> String {
        self.applied_date.format("%d %B %Y").to_string()
    }

    pub fn status_view(&self) -> ApplicationStatusView {
        ApplicationStatusView {
            application_id: self.application_id.clone(),
            applicant: self.applicant_name,
            position: self.position,
            status: self.status,
            status_label: self.status.label(),
            applied_date: self.applied_date,
            applied_date_label: self.applied_date_label(),
            explanation: self.status.explanation(),
        }
    }
}

/// Applicant-facing representation of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationStatusView {
    pub application_id: ApplicationId,
    pub applicant: &'static str,
    pub position: &'static str,
    pub status: ApplicationStatus,
    pub status_label: &'static str,
    pub applied_date: NaiveDate,
    pub applied_date_label: String,
    pub explanation: &'static str,
}

/// Headline counts shown under the tracker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ApplicationStatistics {
    pub total: usize,
    pub under_review: usize,
    pub interviews_scheduled: usize,
}

impl ApplicationStatistics {
    pub fn from_records(records: &[ApplicationRecord]) -> Self {
        let count = |status: ApplicationStatus| {
            records
                .iter()
                .filter(|record| record.status == status)
                .count()
        };

        Self {
            total: records.len(),
            under_review: count(ApplicationStatus::UnderReview),
            interviews_scheduled: count(ApplicationStatus::InterviewScheduled),
        }
    }
}
