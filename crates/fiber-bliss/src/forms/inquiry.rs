use serde::{Deserialize, Serialize};

use super::{AcknowledgeForm, Acknowledgment};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductInterest {
    #[default]
    Hats,
    Bikinis,
    TwoPieceSets,
    Handbags,
    MultipleItems,
}

impl ProductInterest {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Hats,
            Self::Bikinis,
            Self::TwoPieceSets,
            Self::Handbags,
            Self::MultipleItems,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Hats => "Hats",
            Self::Bikinis => "Bikinis",
            Self::TwoPieceSets => "Two-Piece Sets",
            Self::Handbags => "Handbags",
            Self::MultipleItems => "Multiple Items",
        }
    }
}

/// Showcase "Send Inquiry" form. Missing fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InquirySubmission {
    pub name: String,
    pub email: String,
    pub product_interest: ProductInterest,
    pub message: String,
}

impl AcknowledgeForm for InquirySubmission {
    fn required_values(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.message.as_str()]
    }

    fn success(&self) -> Acknowledgment {
        Acknowledgment::Success {
            message: format!("Thank you {}! We'll contact you soon.", self.name.trim()),
            follow_up: None,
        }
    }

    fn warning(&self) -> Acknowledgment {
        Acknowledgment::ValidationWarning {
            message: "Please fill in all fields.",
        }
    }
}
