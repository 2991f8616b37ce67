//! Business profile and recruitment pages for Kwazi's Fiber Bliss.
//!
//! All business facts are compiled in. The crate turns them into content
//! trees for two pages (the product showcase and the careers portal) and
//! exposes axum routers that serve those trees as JSON.

pub mod applications;
pub mod config;
pub mod content;
pub mod error;
pub mod forms;
pub mod pages;
pub mod telemetry;

#[cfg(test)]
pub(crate) mod test_support;
