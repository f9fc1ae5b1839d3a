//! Server startup from config: seeding, snapshot persistence and the file lock.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{sample_seed, wait_for_server};
use tallyboard::api::{ApiServer, ServerError};
use tallyboard::client::CounterClient;
use tallyboard::config::{ClientConfig, Config};
use tallyboard::store::{CounterId, CounterStore, StoreError};

fn config_with_file(path: std::path::PathBuf) -> Config {
    let mut config = Config::default();
    config.server.bind_addr = "127.0.0.1:0".to_string();
    config.server.data_file = Some(path);
    config.seed = sample_seed();
    config
}

async fn start(config: &Config) -> (CounterClient, tallyboard::api::ServerHandle, tokio::task::JoinHandle<Result<(), ServerError>>) {
    let mut server = ApiServer::from_config(config).unwrap();
    let addr = server.bind(&config.server.bind_addr).await.unwrap();
    let handle = server.handle();
    let task = tokio::spawn(server.run());
    assert!(wait_for_server(addr, Duration::from_secs(5)).await);
    let client = CounterClient::new(&ClientConfig {
        base_url: format!("http://{addr}"),
        ..ClientConfig::default()
    })
    .unwrap();
    (client, handle, task)
}

#[tokio::test]
async fn values_survive_a_restart() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = config_with_file(dir.path().join("data.json"));

    let (client, handle, task) = start(&config).await;
    client.increment(CounterId(1), 5).await.unwrap();
    handle.shutdown();
    task.await.unwrap().unwrap();

    let (client, handle, task) = start(&config).await;
    let counters = client.list_counters().await.unwrap();
    assert_eq!(counters.len(), 3, "seed must not be applied twice");
    assert_eq!(counters[0].value, 15);
    handle.shutdown();
    task.await.unwrap().unwrap();
}

#[tokio::test]
async fn second_server_on_same_file_is_refused() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = config_with_file(dir.path().join("data.json"));

    let first = ApiServer::from_config(&config).unwrap();
    let second = ApiServer::from_config(&config);
    assert!(matches!(
        second,
        Err(ServerError::Store(StoreError::Locked { .. }))
    ));
    drop(first);

    assert!(ApiServer::from_config(&config).is_ok());
}

#[tokio::test]
async fn in_memory_server_seeds_from_config() {
    let mut config = Config::default();
    config.server.bind_addr = "127.0.0.1:0".to_string();
    config.seed = sample_seed();

    let (client, handle, task) = start(&config).await;
    let counters = client.list_counters().await.unwrap();
    assert_eq!(counters.len(), 3);
    assert_eq!(counters[2].group.as_ref().unwrap().group_name, "Reading");
    handle.shutdown();
    task.await.unwrap().unwrap();
}

#[tokio::test]
async fn run_without_bind_fails() {
    let server = ApiServer::new(Arc::new(CounterStore::new()));
    assert!(matches!(server.run().await, Err(ServerError::NotBound)));
}

#[tokio::test]
async fn bad_bind_address_is_reported() {
    let mut server = ApiServer::new(Arc::new(CounterStore::new()));
    let err = server.bind("not an address").await.unwrap_err();
    assert!(matches!(err, ServerError::InvalidAddress { .. }));
}
