mod portal;
mod sections;
mod view;

pub use portal::{ApplyPrompt, CareersPortal, PortalError, RenderRequest};
pub use sections::{select_section, SectionContext};
pub use view::{CareersView, UnknownView};
