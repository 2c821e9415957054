//! FAQDesk API Gateway
//!
//! Serves keyword search over the FAQ corpus.
//! Handles:
//! - Request routing and body decoding
//! - Backpressure (body limit, timeout, concurrency limit)
//! - Observability (logging, metrics)

mod handlers;
mod middleware;
mod router;

use faqdesk_common::{
    config::{AppConfig, ObservabilityConfig},
    metrics::{self, LATENCY_BUCKETS},
    Corpus,
};
use faqdesk_search::{FaqSearcher, SearchOptions};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub searcher: FaqSearcher,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    init_tracing(&config.observability);

    info!("Starting FAQDesk API Gateway v{}", faqdesk_common::VERSION);

    let metrics_handle = init_metrics(&config.observability)?;

    // Load the corpus once; it is read-only from here on
    let corpus = Corpus::load(config.search.corpus_path.as_deref()).map_err(|e| {
        tracing::error!(error = %e, "Failed to load FAQ corpus");
        e
    })?;
    metrics::record_corpus_size(corpus.len());

    let searcher = FaqSearcher::new(corpus, SearchOptions::from(&config.search));
    let config = Arc::new(config);

    let state = AppState {
        config: config.clone(),
        searcher,
    };

    let app = router::create_router(state, metrics_handle);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Initialize the tracing subscriber. `RUST_LOG` wins over the configured level.
fn init_tracing(config: &ObservabilityConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if config.json_logging {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Install the Prometheus recorder when metrics are enabled
fn init_metrics(
    config: &ObservabilityConfig,
) -> Result<Option<PrometheusHandle>, Box<dyn std::error::Error>> {
    if !config.metrics_enabled {
        info!("Metrics disabled");
        return Ok(None);
    }

    let handle = PrometheusBuilder::new()
        .set_buckets(LATENCY_BUCKETS)?
        .install_recorder()?;
    metrics::register_metrics();

    info!(service = %config.service_name, "Prometheus recorder installed");
    Ok(Some(handle))
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, starting shutdown..."),
        _ = terminate => info!("Received SIGTERM, starting shutdown..."),
    }
}
