//! Binary entrypoint for the ROI API server.
use roi_api::{run, ApiConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // ROI_ADDR and ROI_CATALOG override the defaults
    let config = ApiConfig::from_env();
    if let Err(err) = run(&config).await {
        tracing::error!(error = %err, "server stopped");
        std::process::exit(1);
    }
}
