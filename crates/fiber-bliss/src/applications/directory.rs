use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use super::domain::{ApplicationId, ApplicationRecord, ApplicationStatus};

/// Read-only source of application records so lookups can be exercised in isolation.
pub trait ApplicationDirectory: Send + Sync {
    fn find(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, DirectoryError>;
    fn all(&self) -> Result<Vec<ApplicationRecord>, DirectoryError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    #[error("duplicate application id {0}")]
    DuplicateId(String),
    #[error("invalid sample applied date")]
    InvalidDate,
    #[error("application directory unavailable: {0}")]
    Unavailable(String),
}

const ID_PREFIX: &str = "KFB-APP";
const FIRST_SEQUENCE: u32 = 1000;
const DAYS_BETWEEN_APPLICATIONS: u64 = 5;

const SAMPLE_ROWS: [(&str, &str, ApplicationStatus); 8] = [
    ("Sarah M.", "Lead Crochet Artisan", ApplicationStatus::UnderReview),
    ("Jessica T.", "Sales Coordinator", ApplicationStatus::InterviewScheduled),
    ("Emma R.", "Junior Assistant", ApplicationStatus::New),
    ("Michael B.", "Quality Control", ApplicationStatus::Rejected),
    ("Patricia L.", "Business Intern", ApplicationStatus::UnderReview),
    ("David K.", "Lead Crochet Artisan", ApplicationStatus::New),
    ("Lisa W.", "Junior Assistant", ApplicationStatus::InterviewScheduled),
    ("Grace N.", "Sales Coordinator", ApplicationStatus::UnderReview),
];

/// Fixed, display-only sample of applications, keyed by id.
#[derive(Debug, Clone)]
pub struct SampleApplications {
    records: BTreeMap<ApplicationId, ApplicationRecord>,
    order: Vec<ApplicationId>,
}

impl SampleApplications {
    /// The eight illustrative rows, `KFB-APP1000` onwards, applied five days apart from 2024-01-01.
    pub fn generate() -> Result<Self, DirectoryError> {
        let first_date = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or(DirectoryError::InvalidDate)?;

        let records = SAMPLE_ROWS
            .iter()
            .zip(0u32..)
            .map(|(row, index)| sample_record(first_date, index, *row))
            .collect::<Result<Vec<_>, DirectoryError>>()?;

        Self::from_records(records)
    }

    /// Build a directory, rejecting any repeated application id.
    pub fn from_records(records: Vec<ApplicationRecord>) -> Result<Self, DirectoryError> {
        let mut by_id = BTreeMap::new();
        let mut order = Vec::with_capacity(records.len());

        for record in records {
            let id = record.application_id.clone();
            if by_id.insert(id.clone(), record).is_some() {
                return Err(DirectoryError::DuplicateId(id.0));
            }
            order.push(id);
        }

        Ok(Self {
            records: by_id,
            order,
        })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

fn sample_record(
    first_date: NaiveDate,
    index: u32,
    (applicant_name, position, status): (&'static str, &'static str, ApplicationStatus),
) -> Result<ApplicationRecord, DirectoryError> {
    let applied_date = first_date
        .checked_add_days(Days::new(u64::from(index) * DAYS_BETWEEN_APPLICATIONS))
        .ok_or(DirectoryError::InvalidDate)?;

    Ok(ApplicationRecord {
        application_id: ApplicationId(format!("{ID_PREFIX}{}", FIRST_SEQUENCE + index)),
        applicant_name,
        position,
        status,
        applied_date,
    })
}

impl ApplicationDirectory for SampleApplications {
    fn find(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, DirectoryError> {
        Ok(self.records.get(id).cloned())
    }

    fn all(&self) -> Result<Vec<ApplicationRecord>, DirectoryError> {
        Ok(self
            .order
            .iter()
            .filter_map(|id| self.records.get(id).cloned())
            .collect())
    }
}
