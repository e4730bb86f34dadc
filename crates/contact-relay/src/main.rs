use anyhow::{Context, Result};
use contact_relay::{app, mailer, AppState, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("Failed to load relay configuration")?;

    let mailer = mailer::from_config(&config).context("Failed to set up mailer")?;
    info!(
        mailer = mailer.name(),
        endpoint = %config.server.endpoint,
        to = %config.mail.to,
        "contact-relay starting"
    );

    let state = AppState::new(mailer, config.mail.clone());
    let app = app(state, &config)?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
