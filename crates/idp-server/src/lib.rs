//! # idp-server
//!
//! HTTP server for the minimal SAML identity provider.
//!
//! Every GET request is treated as an HTTP-Redirect `AuthnRequest` and is
//! answered with an auto-submitting HTTP-POST form for a fixed profile.
//!
//! ## Usage
//!
//! ```ignore
//! use idp_server::{Server, ServerConfig};
//!
//! let config = ServerConfig::from_env()?;
//! Server::new(config).run().await?;
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod providers;
pub mod router;
pub mod state;

pub use config::ServerConfig;
pub use providers::StaticProfileProvider;
pub use router::create_router;
pub use state::AppState;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use idp_protocol_saml::endpoints::ProfileProvider;
use tokio::net::TcpListener;

/// The SAML IdP server.
pub struct Server<P = StaticProfileProvider>
where
    P: ProfileProvider,
{
    config: ServerConfig,
    profiles: Arc<P>,
}

impl Server {
    /// Creates a server that asserts the default static profile.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self::with_profiles(config, StaticProfileProvider::default())
    }
}

impl<P: ProfileProvider> Server<P> {
    /// Creates a server that asks `profiles` for the identity to assert.
    #[must_use]
    pub fn with_profiles(config: ServerConfig, profiles: P) -> Self {
        Self {
            config,
            profiles: Arc::new(profiles),
        }
    }

    /// Creates a test router without starting the server.
    ///
    /// This is useful for integration testing.
    pub fn test_router(&self) -> Router {
        create_router(AppState::new(Arc::clone(&self.profiles)))
    }

    /// Binds the listening socket without serving yet.
    pub async fn bind(self) -> anyhow::Result<BoundServer> {
        let app = self.test_router();

        let addr = self.config.bind_addr()?;
        let listener = TcpListener::bind(addr).await?;

        Ok(BoundServer { listener, app })
    }

    /// Runs the server.
    ///
    /// This starts the HTTP server and blocks until it receives a shutdown signal.
    pub async fn run(self) -> anyhow::Result<()> {
        self.bind().await?.serve(shutdown_signal()).await
    }
}

/// A server whose socket is bound but not yet accepting requests.
pub struct BoundServer {
    listener: TcpListener,
    app: Router,
}

impl BoundServer {
    /// Returns the address actually bound, which matters when port 0 was requested.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serves requests until `shutdown` resolves.
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.listener.local_addr()?;
        tracing::info!("Server listening on http://{}", addr);

        axum::serve(self.listener, self.app)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

/// Waits for a shutdown signal.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
