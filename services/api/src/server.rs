use crate::cli::ServeArgs;
use crate::infra::{file_checklist_store, memory_checklist_store, AppState};
use crate::routes::with_service_routes;
use admission_guide::config::{AppConfig, StorageBackend};
use admission_guide::error::AppError;
use admission_guide::telemetry;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let router = match config.storage.backend {
        StorageBackend::File => {
            with_service_routes(Arc::new(file_checklist_store(&config.storage)))
        }
        StorageBackend::Memory => with_service_routes(Arc::new(memory_checklist_store())),
    };
    let app = router.layer(Extension(app_state)).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "admission guide ready");

    axum::serve(listener, app).await?;
    Ok(())
}
