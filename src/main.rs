use std::sync::Arc;

use tracing::info;

use sevapass::{Config, MemoryAccountStore, SharedStore, WebServer};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load_with_env("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging
    if let Err(e) = sevapass::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        sevapass::logging::init_console_only(&config.logging.level);
    }

    // The token secret is mandatory; refuse to start without it.
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    info!("sevapass - passport portal account service");

    let store: SharedStore = Arc::new(MemoryAccountStore::new());

    let server = match WebServer::new(&config, store) {
        Ok(server) => server,
        Err(e) => {
            eprintln!("Failed to configure server: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run().await {
        eprintln!("Server error: {e}");
        std::process::exit(1);
    }
}
