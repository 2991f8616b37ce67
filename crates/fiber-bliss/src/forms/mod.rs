//! Form acknowledgment for the inquiry and job application forms.
//!
//! Validation is presence-only: a required field counts as filled when it has
//! at least one non-whitespace character. Nothing submitted here is stored or
//! forwarded; the caller only gets a message to show inline.

mod application;
mod inquiry;

pub use application::{
    Availability, CrochetExperience, ExperienceLevel, JobApplicationSubmission, ResumeFileName,
    ResumeFileNameError, POSITION_PLACEHOLDER,
};
pub use inquiry::{InquirySubmission, ProductInterest};

use serde::Serialize;

/// Outcome of a form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Acknowledgment {
    Success {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        follow_up: Option<String>,
    },
    /// Deliberately generic: it never says which field was missing.
    ValidationWarning { message: &'static str },
}

impl Acknowledgment {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message, .. } => message.as_str(),
            Self::ValidationWarning { message } => message,
        }
    }
}

/// Implemented by every form that can be acknowledged.
pub trait AcknowledgeForm {
    /// Values of the fields marked required, in form order.
    fn required_values(&self) -> Vec<&str>;

    fn success(&self) -> Acknowledgment;

    fn warning(&self) -> Acknowledgment;

    fn acknowledge(&self) -> Acknowledgment {
        if self.required_values().into_iter().all(is_filled) {
            self.success()
        } else {
            self.warning()
        }
    }
}

pub(crate) fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}
