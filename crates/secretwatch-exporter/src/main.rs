//! secretwatch exporter
//!
//! - Reads CLIENT_ID / TENANT_ID / CLIENT_SECRET (required) and flags
//! - Refreshes application secret expiry times in the background
//! - Serves them on GET /metrics (default 0.0.0.0:2112)

use std::future::Future;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use secretwatch_core::error::{MonitorError, Result};
use secretwatch_exporter::config::{self, Args, ClientCredentials};
use secretwatch_exporter::directory::GraphDirectoryClient;
use secretwatch_exporter::refresh::{self, RefreshEngine};
use secretwatch_exporter::{app_state, router};

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(class = e.class().as_str(), error = %e, "secretwatch-exporter exiting");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let cfg = config::load(&args)?;
    let creds = ClientCredentials::from_env()?;
    let listen = cfg.exporter.listen_addr()?;

    let client = Arc::new(GraphDirectoryClient::new(&cfg.directory, creds)?);

    let state = app_state::AppState::new(cfg);
    let engine = Arc::new(RefreshEngine::new(client, state.registry(), &state.cfg().refresh));
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| MonitorError::Server(format!("bind {listen} failed: {e}")))?;

    let shutdown = shutdown_signal();
    let refresh = refresh::spawn(engine, args.refresh_interval);
    tracing::info!(%listen, interval = ?args.refresh_interval, "secretwatch-exporter starting");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| MonitorError::Server(e.to_string()));

    refresh.shutdown().await;
    served
}

/// SIGTERM is registered eagerly so a stop request right after startup is not
/// lost to the default handler.
fn shutdown_signal() -> impl Future<Output = ()> {
    #[cfg(unix)]
    let terminate = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate());

    async move {
        let ctrl_c = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %e, "cannot listen for ctrl-c");
                std::future::pending::<()>().await;
            }
        };

        #[cfg(unix)]
        let terminate = async {
            match terminate {
                Ok(mut sig) => {
                    sig.recv().await;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "cannot listen for SIGTERM");
                    std::future::pending::<()>().await;
                }
            }
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {}
            _ = terminate => {}
        }
        tracing::info!("shutdown requested");
    }
}
