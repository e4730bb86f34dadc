// contact-relay - Mail relay endpoint for the contact form
// Accepts the `{"data": {name, email, message}}` envelope and sends it over SMTP

pub mod config;
pub mod error;
pub mod mailer;
pub mod page;
pub mod relay;

use anyhow::{bail, Context, Result};
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::RelayServerError;
pub use mailer::{MailError, Mailer, MemoryMailer, OutgoingEmail, SmtpMailer};

use config::{CorsConfig, MailConfig};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub mailer: Arc<dyn Mailer>,
    pub mail: Arc<MailConfig>,
}

impl AppState {
    pub fn new(mailer: Arc<dyn Mailer>, mail: MailConfig) -> Self {
        Self {
            mailer,
            mail: Arc::new(mail),
        }
    }
}

/// Routes without CORS or tracing layers
pub fn routes(state: AppState, endpoint: &str) -> Router {
    Router::new()
        .route("/", get(page::contact_page).post(page::contact_submit))
        .route("/health", get(|| async { "ok" }))
        .route(endpoint, post(relay::send_email))
        .with_state(state)
}

/// Full application: routes, CORS for the JSON endpoint, request tracing
pub fn app(state: AppState, config: &Config) -> Result<Router> {
    let endpoint = config.server.endpoint.as_str();
    if !endpoint.starts_with('/') || config::RESERVED_PATHS.contains(&endpoint) {
        bail!("relay endpoint '{}' cannot be mounted next to the page routes", endpoint);
    }

    let cors = cors_layer(&config.cors)?;
    Ok(routes(state, &config.server.endpoint)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

/// Any origin when the list is empty, otherwise exactly the listed origins
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    let origin = if config.allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        let origins = config
            .allowed_origins
            .iter()
            .map(|o| {
                HeaderValue::from_str(o).with_context(|| format!("Invalid CORS origin: {}", o))
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]))
}
