use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Init logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();
    fmt().with_env_filter(filter).init();

    // Startup banner at info level so something always prints at default verbosity
    let settings = carrierdeck::config::Settings::from_env();
    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "<unset>".to_string());
    info!(
        target: "startup",
        "carrierdeck starting: RUST_LOG='{}', http_port={}, state_folder='{}', mock_login={}",
        rust_log, settings.http_port, settings.state_folder, settings.mock_login
    );

    carrierdeck::server::run_with_settings(settings).await
}
