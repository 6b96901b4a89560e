//! artist-site server entry point.
//!
//! Starts the Axum HTTP server with the REST endpoints.

use tracing_subscriber::EnvFilter;

use artist_site::app;
use artist_site::app_state::AppState;
use artist_site::config::SiteConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = SiteConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    tracing::info!(
        addr = %config.listen_addr,
        data_dir = %config.data_dir.display(),
        remote_store = config.remote_store.is_some(),
        admin_configured = config.admin_key.is_some(),
        "starting artist-site"
    );

    // Build application state and router
    let app_state = AppState::from_config(&config);
    let app = app(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
