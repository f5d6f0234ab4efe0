use dioxus::prelude::*;
use rankview::config::Config;
use rankview::ui::{make_config, App};
use rankview::ApiHandle;
use tracing::{error, info};

fn main() {
    // Use RUST_LOG env var if set, otherwise default to info level
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    info!("Using API at {}", config.api_url);

    let api = ApiHandle::from_config(&config);

    LaunchBuilder::desktop()
        .with_cfg(make_config())
        .with_context(api)
        .launch(App);
}
