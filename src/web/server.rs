//! Web server for sevapass.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::account::SharedStore;
use crate::auth::TokenIssuer;
use crate::config::Config;
use crate::{Result, SevapassError};

use super::handlers::AppState;
use super::router::{create_health_router, create_router};

/// Web server for the API.
pub struct WebServer {
    /// Server address.
    addr: SocketAddr,
    /// Application state.
    app_state: Arc<AppState>,
    /// CORS allowed origins.
    cors_origins: Vec<String>,
}

impl WebServer {
    /// Create a new web server from configuration and an account store.
    ///
    /// The configuration must already be validated; the token issuer is
    /// built from the configured secret.
    pub fn new(config: &Config, store: SharedStore) -> Result<Self> {
        let addr = format!("{}:{}", config.server.host, config.server.port)
            .parse()
            .map_err(|e| SevapassError::Config(format!("invalid server address: {e}")))?;

        let issuer = Arc::new(TokenIssuer::new(
            &config.auth.token_secret,
            config.auth.token_expiry_secs,
        ));

        Ok(Self {
            addr,
            app_state: Arc::new(AppState::new(store, issuer)),
            cors_origins: config.server.cors_origins.clone(),
        })
    }

    /// Get the configured server address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Run the web server.
    pub async fn run(self) -> std::io::Result<()> {
        let router = create_router(self.app_state, &self.cors_origins)
            .merge(create_health_router());

        let listener = TcpListener::bind(self.addr).await?;
        let local_addr = listener.local_addr()?;

        tracing::info!("Web server listening on http://{}", local_addr);

        axum::serve(listener, router).await
    }
}
