//! Page assembly: the content tree handed to the host for each refresh.

pub mod blocks;
pub mod careers;
pub mod router;
pub mod session;
pub mod showcase;

#[cfg(test)]
mod tests;

pub use blocks::{
    ContentBlock, FormField, NavigationEntry, NoticeLevel, Page, Section, Tab, Widget,
};
pub use careers::{
    select_section, ApplyPrompt, CareersPortal, CareersView, PortalError, RenderRequest,
    SectionContext, UnknownView,
};
pub use router::{careers_router, showcase_router, SESSION_HEADER};
pub use session::{InMemorySessionStore, SessionError, SessionId, SessionState, SessionStore};
pub use showcase::ShowcasePage;

use chrono::Datelike;

/// Calendar year used for footers and years-in-business figures.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
