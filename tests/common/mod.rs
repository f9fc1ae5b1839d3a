//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::net::{SocketAddr, TcpListener};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tallyboard::api::{ApiServer, ServerError, ServerHandle};
use tallyboard::config::{ClientConfig, SeedConfig, SeedCounter, SeedGroup};
use tallyboard::store::CounterStore;
use tempfile::TempDir;
use tokio::task::JoinHandle;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Create a temporary config file with the given contents.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Seed used across the suite:
///
/// | id | name     | value | group   |
/// |----|----------|-------|---------|
/// | 1  | Push-ups | 10    | Fitness |
/// | 2  | Coffee   | 20    | -       |
/// | 3  | Books    | 0     | Reading |
pub fn sample_seed() -> SeedConfig {
    SeedConfig {
        groups: vec![
            SeedGroup {
                name: "Fitness".to_string(),
            },
            SeedGroup {
                name: "Reading".to_string(),
            },
        ],
        counters: vec![
            SeedCounter {
                name: "Push-ups".to_string(),
                value: 10,
                group: Some("Fitness".to_string()),
            },
            SeedCounter {
                name: "Coffee".to_string(),
                value: 20,
                group: None,
            },
            SeedCounter {
                name: "Books".to_string(),
                value: 0,
                group: Some("Reading".to_string()),
            },
        ],
    }
}

pub fn sample_store() -> CounterStore {
    let store = CounterStore::new();
    store.seed(&sample_seed()).expect("Failed to seed store");
    store
}

/// Wait for a server to become available.
pub async fn wait_for_server(addr: SocketAddr, timeout: Duration) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}

/// A live API server on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    handle: ServerHandle,
    task: JoinHandle<Result<(), ServerError>>,
}

impl TestServer {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url(),
            ..ClientConfig::default()
        }
    }

    pub async fn stop(self) {
        self.handle.shutdown();
        let result = tokio::time::timeout(Duration::from_secs(5), self.task)
            .await
            .expect("Server did not stop in time")
            .expect("Server task panicked");
        assert!(result.is_ok(), "Server returned error: {:?}", result);
    }
}

pub async fn spawn_server(store: CounterStore) -> TestServer {
    let mut server = ApiServer::new(Arc::new(store));
    let addr = server
        .bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let handle = server.handle();
    let task = tokio::spawn(server.run());
    assert!(
        wait_for_server(addr, Duration::from_secs(5)).await,
        "Server did not start"
    );
    TestServer { addr, handle, task }
}

/// A base URL nothing listens on.
pub fn unreachable_base_url() -> String {
    format!("http://127.0.0.1:{}", free_port())
}
