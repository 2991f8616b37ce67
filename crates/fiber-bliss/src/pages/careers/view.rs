use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sidebar menu of the careers portal. Exactly one is displayed at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareersView {
    #[default]
    Welcome,
    JobOpenings,
    ApplyNow,
    OurTeam,
    Applications,
    About,
}

impl CareersView {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Welcome,
            Self::JobOpenings,
            Self::ApplyNow,
            Self::OurTeam,
            Self::Applications,
            Self::About,
        ]
    }

    /// Name used in URLs and on the command line.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::JobOpenings => "job_openings",
            Self::ApplyNow => "apply_now",
            Self::OurTeam => "our_team",
            Self::Applications => "applications",
            Self::About => "about",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::JobOpenings => "Job Openings",
            Self::ApplyNow => "Apply Now",
            Self::OurTeam => "Our Team",
            Self::Applications => "Applications",
            Self::About => "About KFB",
        }
    }

    pub const fn heading(self) -> &'static str {
        match self {
            Self::Welcome => "Join Kwazi's Fiber Bliss",
            Self::JobOpenings => "Current Job Opportunities",
            Self::ApplyNow => "Job Application Form",
            Self::OurTeam => "Meet Our Team",
            Self::Applications => "Application Status Tracker",
            Self::About => "About Kwazi's Fiber Bliss",
        }
    }
}

impl fmt::Display for CareersView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown careers view '{0}', expected one of welcome, job_openings, apply_now, our_team, applications, about")]
pub struct UnknownView(pub String);

impl FromStr for CareersView {
    type Err = UnknownView;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
        Self::ordered()
            .into_iter()
            .find(|view| view.slug() == normalized)
            .ok_or_else(|| UnknownView(raw.to_string()))
    }
}
