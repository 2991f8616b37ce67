use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::sections::{select_section, SectionContext};
use super::view::CareersView;
use crate::applications::{
    lookup_application, ApplicationDirectory, DirectoryError, LookupOutcome,
};
use crate::content::{DerivedMetrics, HeroImage, ImageLoadError, StaticContentStore};
use crate::forms::{AcknowledgeForm, Acknowledgment, JobApplicationSubmission};
use crate::pages::blocks::{ContentBlock, NavigationEntry, NoticeLevel, Page};
use crate::pages::session::{SessionError, SessionId, SessionState, SessionStore};

/// Careers portal composing the static store, session storage, and the application directory.
pub struct CareersPortal<S, D> {
    store: Arc<StaticContentStore>,
    sessions: Arc<S>,
    directory: Arc<D>,
    hero: Result<HeroImage, ImageLoadError>,
}

/// Optional inputs for one careers refresh.
#[derive(Debug, Clone, Default)]
pub struct RenderRequest {
    /// Text typed into the Applications status box.
    pub application_id: Option<String>,
}

/// Response to an "Apply for" button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplyPrompt {
    pub job_title: &'static str,
    pub notice: ContentBlock,
    pub session: SessionState,
}

#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error("no open position matches '{0}'")]
    UnknownJob(String),
}

impl<S, D> CareersPortal<S, D>
where
    S: SessionStore + 'static,
    D: ApplicationDirectory + 'static,
{
    pub fn new(
        store: Arc<StaticContentStore>,
        sessions: Arc<S>,
        directory: Arc<D>,
        hero_image_url: &str,
    ) -> Self {
        let caption = format!(
            "Building careers since {}",
            store.careers_profile().founded_year
        );
        let hero = HeroImage::load(hero_image_url, caption);
        if let Err(err) = &hero {
            debug!(%err, "careers hero image unavailable, rendering instructions instead");
        }

        Self {
            store,
            sessions,
            directory,
            hero,
        }
    }

    pub fn session(&self, session: &SessionId) -> Result<SessionState, PortalError> {
        Ok(self.sessions.load(session)?)
    }

    /// Record the menu choice for this session only.
    pub fn select_view(
        &self,
        session: &SessionId,
        view: CareersView,
    ) -> Result<SessionState, PortalError> {
        let mut state = self.sessions.load(session)?;
        if state.view != view {
            debug!(session = session.as_str(), %view, "careers view selected");
        }
        state.view = view;
        self.sessions.save(session, state.clone())?;
        Ok(state)
    }

    /// Build the page for whatever view the session currently has selected.
    pub fn render(
        &self,
        session: &SessionId,
        request: &RenderRequest,
        current_year: i32,
    ) -> Result<Page, PortalError> {
        let state = self.sessions.load(session)?;
        self.render_view(state.view, request, current_year)
    }

    /// Build the page for `view` without touching any session.
    pub fn render_view(
        &self,
        view: CareersView,
        request: &RenderRequest,
        current_year: i32,
    ) -> Result<Page, PortalError> {
        let profile = self.store.careers_profile();
        let metrics = DerivedMetrics::compute(&profile, self.store.jobs(), current_year);
        // Only the Applications view reads the directory.
        let (applications, lookup) = match view {
            CareersView::Applications => {
                let lookup = match request.application_id.as_deref() {
                    Some(raw) => self.lookup(raw)?,
                    None => LookupOutcome::Skipped,
                };
                (self.directory.all()?, lookup)
            }
            _ => (Vec::new(), LookupOutcome::Skipped),
        };

        let ctx = SectionContext {
            store: &self.store,
            profile: &profile,
            metrics,
            applications: &applications,
            lookup: &lookup,
        };
        let section = select_section(view, &ctx);

        let navigation = CareersView::ordered()
            .into_iter()
            .map(|entry| NavigationEntry {
                view: entry.slug(),
                label: entry.label(),
                selected: entry == view,
            })
            .collect();

        Ok(Page {
            title: profile.name.to_string(),
            tagline: "Career Opportunities - Join Our Growing Family".to_string(),
            hero: ContentBlock::hero(&self.hero),
            navigation,
            sidebar: vec![
                ContentBlock::heading(2, "KFB Recruitment"),
                ContentBlock::text(profile.tagline),
                ContentBlock::Divider,
                ContentBlock::card(
                    "Contact HR",
                    vec![
                        ContentBlock::text(profile.email),
                        ContentBlock::text("066 270 8613"),
                    ],
                ),
            ],
            sections: vec![section],
            footer: vec![
                format!("© {}-{} {}", profile.founded_year, current_year, profile.name),
                "Equal Opportunity Employer".to_string(),
                "Made with love in South Africa".to_string(),
            ],
        })
    }

    /// Remember the job behind an "Apply for" button. The session's view is left as it was.
    pub fn apply_for(&self, session: &SessionId, job: &str) -> Result<ApplyPrompt, PortalError> {
        let listing = self
            .store
            .jobs()
            .find_by_title_or_slug(job)
            .ok_or_else(|| PortalError::UnknownJob(job.to_string()))?;

        let mut state = self.sessions.load(session)?;
        state.selected_job = Some(listing.title.to_string());
        self.sessions.save(session, state.clone())?;

        Ok(ApplyPrompt {
            job_title: listing.title,
            notice: ContentBlock::notice(
                NoticeLevel::Info,
                format!(
                    "Scroll down to 'Apply Now' section to apply for {}",
                    listing.title
                ),
            ),
            session: state,
        })
    }

    /// Acknowledge the application form. A position that is not an open job counts as unselected.
    pub fn submit_application(&self, submission: &JobApplicationSubmission) -> Acknowledgment {
        if self.store.jobs().find(submission.position.trim()).is_none() {
            debug!(position = %submission.position, "application names no open position");
            return submission.warning();
        }
        submission.acknowledge()
    }

    pub fn lookup(&self, raw: &str) -> Result<LookupOutcome, PortalError> {
        Ok(lookup_application(self.directory.as_ref(), raw)?)
    }
}
