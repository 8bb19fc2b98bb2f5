use crate::cli::ServeArgs;
use crate::infra::{load_knowledge_base, AppState};
use crate::routes::with_analysis_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use skincare_check::analysis::IngredientAnalyzer;
use skincare_check::config::AppConfig;
use skincare_check::error::AppError;
use skincare_check::telemetry;
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

    let knowledge_base = load_knowledge_base(&config.knowledge_base)?;
    info!(entries = knowledge_base.len(), "knowledge base ready");
    let analyzer = Arc::new(IngredientAnalyzer::new(Arc::new(knowledge_base)));

    let app = with_analysis_routes(analyzer)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "ingredient analysis service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
