use fiber_bliss::applications::SampleApplications;
use fiber_bliss::config::ContentConfig;
use fiber_bliss::content::StaticContentStore;
use fiber_bliss::error::AppError;
use fiber_bliss::pages::{CareersPortal, InMemorySessionStore, ShowcasePage};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type Portal = CareersPortal<InMemorySessionStore, SampleApplications>;

/// Both pages plus the directory they share.
#[derive(Clone)]
pub(crate) struct Pages {
    pub(crate) showcase: Arc<ShowcasePage>,
    pub(crate) careers: Arc<Portal>,
    pub(crate) directory: Arc<SampleApplications>,
}

pub(crate) fn build_pages(
    content: &ContentConfig,
    sessions: Arc<InMemorySessionStore>,
) -> Result<Pages, AppError> {
    let store = Arc::new(StaticContentStore::new());
    let directory = Arc::new(SampleApplications::generate()?);

    let showcase = Arc::new(ShowcasePage::new(store.clone(), &content.hero_image_url));
    let careers = Arc::new(CareersPortal::new(
        store,
        sessions,
        directory.clone(),
        &content.hero_image_url,
    ));

    Ok(Pages {
        showcase,
        careers,
        directory,
    })
}
