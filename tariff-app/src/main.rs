//! # Tariff Adjustment BFF
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize logging and optional trace export
//! - Build the downstream adapters over one shared HTTP client
//! - Create the use cases
//! - Start the HTTP server

mod config;

use std::sync::Arc;

use opentelemetry::global;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

use tariff_hex::{AccountService, AppState, HttpServer, SearchService};
use tariff_integrations::{AccountsApi, AdjustmentFlowApi, EndpointFactory, SearchEngine};

use config::{Config, LogFormat};

fn init_tracer(endpoint: &str) -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // Use gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("tariff-bff"), provider))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    let (otel_tracer, otel_provider) = match config.otlp_endpoint.as_deref() {
        Some(endpoint) => {
            let (tracer, provider) = init_tracer(endpoint)?;
            (Some(tracer), Some(provider))
        }
        None => (None, None),
    };
    let telemetry = otel_tracer.map(|t| tracing_opentelemetry::layer().with_tracer(t));

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer().json().boxed(),
        LogFormat::Text => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,tariff_app=debug,tariff_hex=debug,tariff_integrations=debug".into()
            }),
        )
        .with(telemetry)
        .init();

    tracing::info!("Starting tariff BFF on port {}", config.port);
    tracing::info!(
        backend_url = %config.backend_url,
        public_base_url = %config.public_base_url,
        "downstream configuration"
    );

    // One client (and connection pool) for every downstream adapter
    let factory = EndpointFactory::with_timeouts(
        config.backend_url.as_str(),
        config.request_timeout,
        config.idle_timeout,
    )?;

    let accounts = Arc::new(AccountsApi::new(&factory));
    let flow = Arc::new(AdjustmentFlowApi::new(&factory));
    let searcher = Arc::new(SearchEngine::new(&factory));

    let account_service =
        AccountService::new(accounts.clone(), accounts, flow, &config.public_base_url);
    tracing::info!(callback_url = %account_service.callback_url(), "notification callback");

    let search_service = Arc::new(SearchService::new(searcher));

    let server = HttpServer::new(AppState::new(account_service, search_service));
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Ensure traces are flushed before exit
    if let Some(provider) = otel_provider {
        let _ = provider.shutdown();
    }
    Ok(())
}
