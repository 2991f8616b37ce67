use serde::{Deserialize, Serialize};

use super::{AcknowledgeForm, Acknowledgment};

/// First entry of the position dropdown; choosing it counts as no position.
pub const POSITION_PLACEHOLDER: &str = "Select a position";

const FOLLOW_UP: &str =
    "We will contact you within 5-7 business days. For urgent inquiries, WhatsApp: 0662708613";

const RESUME_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    #[default]
    NoExperience,
    LessThanOneYear,
    OneToTwoYears,
    ThreeToFiveYears,
    FivePlusYears,
}

impl ExperienceLevel {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::NoExperience,
            Self::LessThanOneYear,
            Self::OneToTwoYears,
            Self::ThreeToFiveYears,
            Self::FivePlusYears,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NoExperience => "No experience",
            Self::LessThanOneYear => "Less than 1 year",
            Self::OneToTwoYears => "1-2 years",
            Self::ThreeToFiveYears => "3-5 years",
            Self::FivePlusYears => "5+ years",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrochetExperience {
    #[default]
    NoExperience,
    Beginner,
    Intermediate,
    Advanced,
    Professional,
}

impl CrochetExperience {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::NoExperience,
            Self::Beginner,
            Self::Intermediate,
            Self::Advanced,
            Self::Professional,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NoExperience => "No experience",
            Self::Beginner => "Beginner (self-taught)",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Professional => "Professional",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    #[default]
    Immediately,
    WithinTwoWeeks,
    WithinOneMonth,
    Flexible,
}

impl Availability {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Immediately,
            Self::WithinTwoWeeks,
            Self::WithinOneMonth,
            Self::Flexible,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Immediately => "Immediately",
            Self::WithinTwoWeeks => "Within 2 weeks",
            Self::WithinOneMonth => "Within 1 month",
            Self::Flexible => "Flexible",
        }
    }
}

/// Name of an attached resume. Only the name is accepted; the file itself never is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResumeFileName(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("resume '{0}' must be a PDF, DOC, or DOCX file")]
pub struct ResumeFileNameError(pub String);

impl ResumeFileName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ResumeFileName {
    type Error = ResumeFileNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let accepted = value
            .rsplit_once('.')
            .map(|(stem, extension)| {
                !stem.trim().is_empty()
                    && RESUME_EXTENSIONS
                        .iter()
                        .any(|allowed| extension.eq_ignore_ascii_case(allowed))
            })
            .unwrap_or(false);

        if accepted {
            Ok(Self(value))
        } else {
            Err(ResumeFileNameError(value))
        }
    }
}

impl From<ResumeFileName> for String {
    fn from(value: ResumeFileName) -> Self {
        value.0
    }
}

/// Careers "Job Application Form".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct JobApplicationSubmission {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub position: String,
    pub experience: ExperienceLevel,
    pub crochet_experience: CrochetExperience,
    pub availability: Availability,
    pub why_join: String,
    pub resume: Option<ResumeFileName>,
}

impl Default for JobApplicationSubmission {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            location: String::new(),
            position: POSITION_PLACEHOLDER.to_string(),
            experience: ExperienceLevel::default(),
            crochet_experience: CrochetExperience::default(),
            availability: Availability::default(),
            why_join: String::new(),
            resume: None,
        }
    }
}

impl JobApplicationSubmission {
    fn chosen_position(&self) -> &str {
        let position = self.position.trim();
        if position == POSITION_PLACEHOLDER {
            ""
        } else {
            position
        }
    }
}

impl AcknowledgeForm for JobApplicationSubmission {
    fn required_values(&self) -> Vec<&str> {
        vec![
            self.full_name.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            self.location.as_str(),
            self.chosen_position(),
        ]
    }

    fn success(&self) -> Acknowledgment {
        Acknowledgment::Success {
            message: format!(
                "Thank you {}! Your application for {} has been submitted.",
                self.full_name.trim(),
                self.chosen_position()
            ),
            follow_up: Some(FOLLOW_UP.to_string()),
        }
    }

    fn warning(&self) -> Acknowledgment {
        Acknowledgment::ValidationWarning {
            message: "Please fill in all required fields (*)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> JobApplicationSubmission {
        JobApplicationSubmission {
            full_name: "Thandi M.".to_string(),
            email: "thandi@example.com".to_string(),
            phone: "0820000000".to_string(),
            location: "Empangeni".to_string(),
            position: "Quality Control Specialist".to_string(),
            ..JobApplicationSubmission::default()
        }
    }

    #[test]
    fn complete_application_names_position() {
        let ack = complete().acknowledge();
        match ack {
            Acknowledgment::Success { message, follow_up } => {
                assert_eq!(
                    message,
                    "Thank you Thandi M.! Your application for Quality Control Specialist has been submitted."
                );
                assert!(follow_up.expect("follow up present").contains("5-7 business days"));
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[test]
    fn placeholder_position_is_missing() {
        let submission = JobApplicationSubmission {
            position: POSITION_PLACEHOLDER.to_string(),
            ..complete()
        };
        assert_eq!(
            submission.acknowledge(),
            Acknowledgment::ValidationWarning {
                message: "Please fill in all required fields (*)"
            }
        );
    }

    #[test]
    fn why_join_is_optional() {
        let submission = JobApplicationSubmission {
            why_join: String::new(),
            ..complete()
        };
        assert!(submission.acknowledge().is_success());
    }

    #[test]
    fn resume_extension_is_case_insensitive() {
        assert!(ResumeFileName::try_from("cv.PDF".to_string()).is_ok());
        assert!(ResumeFileName::try_from("cv.docx".to_string()).is_ok());
        assert!(ResumeFileName::try_from("cv.png".to_string()).is_err());
        assert!(ResumeFileName::try_from(".pdf".to_string()).is_err());
        assert!(ResumeFileName::try_from("resume".to_string()).is_err());
    }

    #[test]
    fn unsupported_resume_fails_deserialization() {
        let payload = r#"{"full_name":"Thandi","resume":"portfolio.zip"}"#;
        let err = serde_json::from_str::<JobApplicationSubmission>(payload)
            .expect_err("zip resume is rejected");
        assert!(err.to_string().contains("PDF, DOC, or DOCX"));
    }

    #[test]
    fn omitted_position_defaults_to_placeholder() {
        let submission: JobApplicationSubmission =
            serde_json::from_str(r#"{"full_name":"Thandi"}"#).expect("deserializes");
        assert_eq!(submission.position, POSITION_PLACEHOLDER);
        assert_eq!(submission.availability, Availability::Immediately);
    }
}
