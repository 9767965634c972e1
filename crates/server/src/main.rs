//! Lead agent server entry point

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use lead_agent_config::{load_settings, Settings};
use lead_agent_delegate::{ChatDelegate, HttpChatDelegate};
use lead_agent_dispatch::{LeadDispatcher, WebhookLeadSink};
use lead_agent_engine::LeadEngine;
use lead_agent_server::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Priority: env vars > config/{env}.yaml > config/default.yaml > defaults
    let env = std::env::var("LEAD_AGENT_ENV").ok();
    let config = match load_settings(env.as_deref()) {
        Ok(settings) => {
            // Tracing not yet initialized, use eprintln for early logging
            eprintln!(
                "Loaded configuration from files (env: {})",
                env.as_deref().unwrap_or("default")
            );
            settings
        }
        Err(e) => {
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            Settings::default()
        }
    };

    init_tracing(&config);

    tracing::info!("Starting Lead Agent Server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        environment = ?config.environment,
        config_path = env.as_deref().unwrap_or("default"),
        "Configuration loaded"
    );

    let delegate: Arc<dyn ChatDelegate> = Arc::new(HttpChatDelegate::new(
        config.delegate.endpoint.clone(),
        Duration::from_secs(config.delegate.timeout_secs),
        config.delegate.history_window,
    )?);

    let sink = Arc::new(WebhookLeadSink::new(
        config.sink.webhook_url.clone(),
        Duration::from_secs(config.sink.timeout_secs),
    )?);

    let dispatcher = Arc::new(LeadDispatcher::new(sink, Some(delegate.clone())));
    let engine = Arc::new(LeadEngine::new(delegate, dispatcher.clone()));

    tracing::info!(
        delegate_configured = !config.delegate.endpoint.is_empty(),
        sink_configured = !config.sink.webhook_url.is_empty(),
        "Initialized lead engine"
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, engine, dispatcher);
    let app = create_router(state);

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}

/// Initialize tracing from the observability config
fn init_tracing(config: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &config.observability.log_level;
        format!("lead_agent={},tower_http=debug", level).into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if config.observability.log_json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };
    subscriber.with(fmt_layer).init();
}
