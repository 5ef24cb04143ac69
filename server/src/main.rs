mod config;
mod routes;

use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error("{0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")))
        .init();

    let cfg = config::ServerConfig::from_env()?;
    let app = routes::leptos_app().map_err(StartupError::Leptos)?;

    let addr = cfg.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "balancebite listening");
    axum::serve(listener, app).await?;
    Ok(())
}
