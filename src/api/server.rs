use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::api::connection::ConnectionCounter;
use crate::api::router::build_router;
use crate::api::shutdown::ShutdownManager;
use crate::config::Config;
use crate::store::{CounterRepository, CounterStore, SnapshotFile, StoreError};

const DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid bind address '{addr}'")]
    InvalidAddress { addr: String },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("bind() must be called before run()")]
    NotBound,

    #[error("Store initialization failed: {0}")]
    Store(#[from] StoreError),

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

pub struct ApiServer {
    pub addr: SocketAddr,
    /// Populated by bind(), consumed by run().
    listener: Option<TcpListener>,
    repo: Arc<dyn CounterRepository>,
    shutdown: Arc<ShutdownManager>,
}

impl ApiServer {
    pub fn new(repo: Arc<dyn CounterRepository>) -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            listener: None,
            repo,
            shutdown: Arc::new(ShutdownManager::new()),
        }
    }

    /// Open the configured store (snapshot-backed when `data_file` is set)
    /// and seed it if it is empty.
    pub fn from_config(config: &Config) -> Result<Self, ServerError> {
        let store = match &config.server.data_file {
            Some(path) => CounterStore::with_snapshot(SnapshotFile::open(path)?)?,
            None => CounterStore::new(),
        };
        store.seed(&config.seed)?;
        Ok(Self::new(Arc::new(store)))
    }

    /// Bind the listener. Returns the actual address (useful with port 0).
    pub async fn bind(&mut self, bind_addr: &str) -> Result<SocketAddr, ServerError> {
        let addr: SocketAddr = bind_addr.parse().map_err(|_| ServerError::InvalidAddress {
            addr: bind_addr.to_string(),
        })?;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        self.addr = listener
            .local_addr()
            .map_err(|source| ServerError::Bind { addr, source })?;
        self.listener = Some(listener);
        tracing::info!("API server bound to {}", self.addr);
        Ok(self.addr)
    }

    pub fn handle(&self) -> ServerHandle {
        ServerHandle {
            shutdown: self.shutdown.clone(),
        }
    }

    /// Serve until shutdown is signaled, then drain open connections.
    pub async fn run(self) -> Result<(), ServerError> {
        let listener = self.listener.ok_or(ServerError::NotBound)?;

        tracing::info!("Starting API server on {}", self.addr);

        let app = build_router(self.repo.clone());
        let make_service = ConnectionCounter::new(app.into_make_service(), self.shutdown.clone());

        let shutdown = self.shutdown.clone();
        axum::serve(listener, make_service)
            .with_graceful_shutdown(async move { shutdown.wait_for_shutdown().await })
            .into_future()
            .await
            .map_err(ServerError::Serve)?;

        self.shutdown.wait_for_connections(DRAIN_TIMEOUT).await;
        tracing::info!("Shut down gracefully");
        Ok(())
    }
}

#[derive(Clone)]
pub struct ServerHandle {
    shutdown: Arc<ShutdownManager>,
}

impl ServerHandle {
    pub fn shutdown(&self) {
        self.shutdown.signal_shutdown();
    }
}
