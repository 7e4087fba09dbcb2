use crate::cli::ServeArgs;
use crate::infra::{build_service, load_catalog, AppState};
use crate::routes::with_admissions_routes;
use admit_ai::config::AppConfig;
use admit_ai::error::AppError;
use admit_ai::telemetry;
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
    if let Some(path) = args.engine.catalog.take() {
        config.catalog.path = Some(path);
    }
    if let Some(profile) = args.engine.scoring_profile.take() {
        config.scoring.profile = profile;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let catalog = load_catalog(config.catalog.path.as_deref())?;
    let service = build_service(catalog, config.scoring.profile)?;

    let app = with_admissions_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        scoring_profile = ?config.scoring.profile,
        "admissions evaluator ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
