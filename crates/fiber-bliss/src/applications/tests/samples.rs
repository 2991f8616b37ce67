use super::common::*;
use crate::applications::directory::{ApplicationDirectory, DirectoryError};
use crate::applications::domain::{ApplicationId, ApplicationStatistics, ApplicationStatus};
use crate::applications::SampleApplications;
use chrono::NaiveDate;

#[test]
fn generates_eight_sequential_ids() {
    let directory = samples();
    let ids: Vec<_> = directory
        .all()
        .expect("listing succeeds")
        .into_iter()
        .map(|record| record.application_id.0)
        .collect();

    assert_eq!(directory.len(), 8);
    assert_eq!(ids.first().map(String::as_str), Some("KFB-APP1000"));
    assert_eq!(ids.last().map(String::as_str), Some("KFB-APP1007"));
}

#[test]
fn applied_dates_step_five_days() {
    let records = samples().all().expect("listing succeeds");
    assert_eq!(
        records[0].applied_date,
        NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
    );
    assert_eq!(
        records[7].applied_date,
        NaiveDate::from_ymd_opt(2024, 2, 5).expect("valid date")
    );
    assert_eq!(records[2].applied_date_label(), "11 January 2024");
}

#[test]
fn duplicate_ids_are_rejected_at_construction() {
    let result = SampleApplications::from_records(vec![
        record("KFB-APP2000", ApplicationStatus::New),
        record("KFB-APP2000", ApplicationStatus::Rejected),
    ]);

    assert_eq!(
        result.err(),
        Some(DirectoryError::DuplicateId("KFB-APP2000".to_string()))
    );
}

#[test]
fn statistics_count_sample_statuses() {
    let records = samples().all().expect("listing succeeds");
    let stats = ApplicationStatistics::from_records(&records);

    assert_eq!(
        stats,
        ApplicationStatistics {
            total: 8,
            under_review: 3,
            interviews_scheduled: 2,
        }
    );
}

#[test]
fn find_returns_owned_copy() {
    let directory = samples();
    let record = directory
        .find(&ApplicationId("KFB-APP1003".to_string()))
        .expect("lookup succeeds")
        .expect("record present");

    assert_eq!(record.applicant_name, "Michael B.");
    assert_eq!(record.status, ApplicationStatus::Rejected);
}
