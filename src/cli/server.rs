use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use sipandslay_contact::{ContactRelay, Mailer, ResendMailer};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::{config::Config, routes::AppState};

/// Builds the relay from configuration. Without an API key the relay has no
/// mailer and refuses every submission.
pub fn contact_relay(config: &Config) -> ContactRelay {
    let mailer = config.email.api_key().map(|api_key| {
        Arc::new(ResendMailer::new(api_key, &config.email.api_base_url)) as Arc<dyn Mailer>
    });

    if mailer.is_none() {
        tracing::warn!("RESEND_API_KEY is not set, quote requests will be refused");
    }

    ContactRelay::new(mailer, config.email.sender(), config.email.recipient())
}

/// The full application: routes plus response layers.
pub fn app(state: AppState) -> Router {
    crate::routes::router(state)
        .layer(axum::middleware::from_fn(
            crate::middleware::cache_control_middleware,
        ))
        // Minify HTML responses before compression
        .layer(axum::middleware::map_response(
            crate::middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(
    config: Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting sipandslay server...");

    // Use CLI overrides if provided, otherwise use config
    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    let relay = contact_relay(&config);
    tracing::info!(
        from = relay.sender(),
        to = relay.recipient(),
        "Quote requests will be relayed"
    );

    let app = app(AppState { config, relay });

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    let shutdown_signal = async {
        let ctrl_c = async {
            tokio::signal::ctrl_c()
                .await
                .expect("failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to install SIGTERM handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                tracing::info!("Received Ctrl+C signal");
            },
            _ = terminate => {
                tracing::info!("Received SIGTERM signal");
            },
        }

        tracing::info!("Starting graceful shutdown...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    tracing::info!("Graceful shutdown complete");

    Ok(())
}
