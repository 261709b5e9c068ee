use crate::api::cli::ServeArgs;
use crate::api::infra::{AppState, InMemoryDocumentRepository, InMemoryReviewPublisher};
use crate::api::routes::with_document_routes;
use crate::config::AppConfig;
use crate::error::AppError;
use crate::telemetry;
use crate::workflows::documents::DocumentIntakeService;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    args.apply(&mut config.server);

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness = Arc::new(AtomicBool::new(false));

    let repository = Arc::new(InMemoryDocumentRepository::default());
    let reviews = Arc::new(InMemoryReviewPublisher::default());
    let intake = Arc::new(DocumentIntakeService::new(repository, reviews));

    let app = with_document_routes(intake)
        .layer(Extension(AppState {
            readiness: readiness.clone(),
            metrics: Arc::new(prometheus_handle),
        }))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness.store(true, Ordering::Release);

    info!(
        environment = config.environment.label(),
        %addr,
        "document classification service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
