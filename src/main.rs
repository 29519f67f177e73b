use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] hello_spring::ConfigError),
    #[error("failed to bind listener: {0}")]
    TcpBind(std::io::Error),
    #[error("server error: {0}")]
    Run(std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(e) = run().await {
        error!("{}", e);
        return Err(e);
    }

    info!("server stopped");
    Ok(())
}

async fn run() -> Result<(), ServerError> {
    let config = hello_spring::ServerConfig::from_env()?;
    info!("binding to {}", config.addr);
    let tcp_listener = TcpListener::bind(config.addr)
        .await
        .map_err(ServerError::TcpBind)?;

    info!("server starting");
    axum::serve(tcp_listener, hello_spring::create_root_app().into_make_service())
        .with_graceful_shutdown(async {
            let signal = shutdown_signal().await;
            info!(signal, "shutdown requested, draining connections");
        })
        .await
        .map_err(ServerError::Run)
}

/// Resolves with the name of the first termination signal received.
async fn shutdown_signal() -> &'static str {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut terminate =
            signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
        let mut hangup = signal(SignalKind::hangup()).expect("failed to install SIGHUP handler");

        tokio::select! {
            res = tokio::signal::ctrl_c() => {
                res.expect("failed to install Ctrl+C handler");
                "SIGINT"
            }
            _ = terminate.recv() => "SIGTERM",
            _ = hangup.recv() => "SIGHUP",
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
        "Ctrl+C"
    }
}
