use crate::cli::ServeArgs;
use crate::infra::{build_pages, AppState};
use crate::routes::with_page_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use fiber_bliss::config::AppConfig;
use fiber_bliss::error::AppError;
use fiber_bliss::pages::InMemorySessionStore;
use fiber_bliss::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let sessions = Arc::new(InMemorySessionStore::new(config.sessions));
    let pages = build_pages(&config.content, sessions)?;
    let hero_ok = pages.showcase.hero().is_ok();

    let app = with_page_routes(&pages)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        hero_image = hero_ok,
        max_sessions = config.sessions.max_entries,
        "fiber bliss pages ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
