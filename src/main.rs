use std::env;

use performer_settlement::api::{AppState, run_http_server};
use performer_settlement::config::ConfigLoader;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_PORT: u16 = 8080;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let raw_args: Vec<String> = env::args().collect();
    if raw_args.get(1).map(|s| s.as_str()) != Some("serve") {
        eprintln!("Usage: performer-settlement serve [port]");
        std::process::exit(1);
    }

    let port = raw_args
        .get(2)
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let config_dir =
        env::var("SETTLEMENT_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());

    let config = match ConfigLoader::load(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration from {config_dir}: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_http_server(AppState::new(config), port).await {
        eprintln!("Server error: {e}");
        std::process::exit(1);
    }
}
