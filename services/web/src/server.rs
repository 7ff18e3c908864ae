use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::site_router;
use abhivorn_site::config::AppConfig;
use abhivorn_site::error::AppError;
use abhivorn_site::telemetry;
use abhivorn_site::Site;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
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

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let site = Arc::new(Site::from_config(&config)?);
    site.email().initialize();

    let app = site_router(site)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, email_configured = config.email.is_configured(), "abhivorn site ready");

    axum::serve(listener, app).await?;
    Ok(())
}
