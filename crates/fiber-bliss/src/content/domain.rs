use serde::{Deserialize, Serialize};
use std::fmt;

/// Business facts shown in page headers, about sections, and contact blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusinessProfile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub founder_name: &'static str,
    pub founded_year: i32,
    pub email: &'static str,
    pub social_handle: &'static str,
    pub contact_number: &'static str,
}

/// Whole Rand amount as printed on the price list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Rand(pub u32);

impl fmt::Display for Rand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub item_name: &'static str,
    pub price: Rand,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCategory {
    pub name: &'static str,
    pub items: Vec<Product>,
}

/// Ordered price list; category order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCatalog {
    pub categories: Vec<ProductCategory>,
    pub discount: ChildrenDiscount,
}

impl ProductCatalog {
    pub fn category(&self, name: &str) -> Option<&ProductCategory> {
        self.categories.iter().find(|category| category.name == name)
    }

    pub fn item_count(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.items.len())
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildrenDiscount {
    pub amount_off: Rand,
    pub max_age_exclusive: u8,
    pub code: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    PartTimeApprentice,
    Contract,
    Internship,
}

impl EmploymentType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::PartTimeApprentice => "Part-time/Apprentice",
            Self::Contract => "Contract",
            Self::Internship => "Internship",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobListing {
    pub title: &'static str,
    pub location: &'static str,
    pub employment_type: EmploymentType,
    pub salary_range: &'static str,
    pub urgent: bool,
    pub description: &'static str,
    pub requirements: Vec<&'static str>,
}

impl JobListing {
    /// URL-safe form of the title, e.g. `sales-marketing-coordinator`.
    pub fn slug(&self) -> String {
        self.title
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|word| !word.is_empty())
            .map(str::to_ascii_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobCategory {
    pub name: &'static str,
    pub listings: Vec<JobListing>,
}

/// Open positions grouped by category, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobCatalog {
    pub categories: Vec<JobCategory>,
}

impl JobCatalog {
    pub fn listings(&self) -> impl Iterator<Item = &JobListing> {
        self.categories
            .iter()
            .flat_map(|category| category.listings.iter())
    }

    pub fn titles(&self) -> Vec<&'static str> {
        self.listings().map(|listing| listing.title).collect()
    }

    pub fn find(&self, title: &str) -> Option<&JobListing> {
        self.listings().find(|listing| listing.title == title)
    }

    /// Match either the exact title or its slug.
    pub fn find_by_title_or_slug(&self, key: &str) -> Option<&JobListing> {
        self.find(key)
            .or_else(|| self.listings().find(|listing| listing.slug() == key))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeaturedArticle {
    pub headline: &'static str,
    pub publication: &'static str,
    pub published: &'static str,
    pub url: &'static str,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub tenure: &'static str,
}

/// Leadership slot on the team page; `holder` is `None` while the position is open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadershipRole {
    pub title: &'static str,
    pub holder: Option<&'static str>,
    pub highlights: Vec<&'static str>,
}

/// Bold lead-in plus explanation, e.g. "Flexible hours - Work around your schedule".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Perk {
    pub headline: &'static str,
    pub detail: &'static str,
}
