pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use std::sync::Arc;
use tokio::signal;
use tower_http::trace::TraceLayer;
use walletgen_core::WalletGenerator;

/// Build the Axum application router.
pub fn build_router(state: state::AppState) -> Router {
    routes::api_routes()
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the API server and run until Ctrl+C or SIGTERM.
pub async fn start_server(generator: WalletGenerator, bind_addr: &str) -> anyhow::Result<()> {
    let tool = generator.tool().to_string();
    let app = build_router(state::AppState::new(generator));
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!(tool = %tool, "API server listening on {}", bind_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("API server stopped");
    Ok(())
}

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
            Ok(mut sigterm) => {
                sigterm.recv().await;
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
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
