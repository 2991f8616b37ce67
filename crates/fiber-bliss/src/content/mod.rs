//! Compiled-in business content and the figures derived from it.

pub mod domain;
pub mod image;
pub mod metrics;
mod store;

pub use domain::{
    BusinessProfile, ChildrenDiscount, EmploymentType, FeaturedArticle, JobCatalog, JobCategory,
    JobListing, LeadershipRole, Perk, Product, ProductCatalog, ProductCategory, Rand, TeamMember,
};
pub use image::{fallback_instructions, HeroImage, ImageLoadError};
pub use metrics::DerivedMetrics;
pub use store::{StaticContentStore, DEFAULT_HERO_IMAGE_URL};
