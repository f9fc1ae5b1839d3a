//! HTTP API behavior against a live server.

mod common;

use common::{sample_store, spawn_server};
use serde_json::Value;
use tallyboard::store::{Counter, CounterId};

async fn list(client: &reqwest::Client, url: &str) -> Vec<Counter> {
    let resp = client.get(url).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    resp.json().await.unwrap()
}

fn value_of(counters: &[Counter], id: i64) -> i64 {
    counters
        .iter()
        .find(|c| c.counter_id == CounterId(id))
        .map(|c| c.value)
        .expect("counter missing")
}

#[tokio::test]
async fn list_returns_all_counters_with_groups() {
    let server = spawn_server(sample_store()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(server.url("/api/counters"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();

    let counters = body.as_array().expect("array");
    assert_eq!(counters.len(), 3);
    assert_eq!(counters[0]["counterId"], 1);
    assert_eq!(counters[0]["counterName"], "Push-ups");
    assert_eq!(counters[0]["value"], 10);
    assert_eq!(counters[0]["group"]["groupName"], "Fitness");
    assert!(counters[1]["group"].is_null());

    server.stop().await;
}

#[tokio::test]
async fn list_is_idempotent() {
    let server = spawn_server(sample_store()).await;
    let client = reqwest::Client::new();
    let url = server.url("/api/counters");

    let first = list(&client, &url).await;
    let second = list(&client, &url).await;
    assert_eq!(first, second);

    server.stop().await;
}

#[tokio::test]
async fn empty_store_lists_nothing() {
    let server = spawn_server(tallyboard::store::CounterStore::new()).await;
    let client = reqwest::Client::new();

    let counters = list(&client, &server.url("/api/counters")).await;
    assert!(counters.is_empty());

    server.stop().await;
}

#[tokio::test]
async fn increment_without_value_adds_one() {
    let server = spawn_server(sample_store()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(server.url("/api/counters/2/inc"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let counter: Counter = resp.json().await.unwrap();
    assert_eq!(counter.counter_id, CounterId(2));
    assert_eq!(counter.value, 21);

    let counters = list(&client, &server.url("/api/counters")).await;
    assert_eq!(value_of(&counters, 2), 21);

    server.stop().await;
}

#[tokio::test]
async fn increment_accepts_negative_and_zero() {
    let server = spawn_server(sample_store()).await;
    let client = reqwest::Client::new();

    let counter: Counter = client
        .post(server.url("/api/counters/1/inc?value=-15"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(counter.value, -5);

    let counter: Counter = client
        .post(server.url("/api/counters/1/inc?value=0"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(counter.value, -5);

    server.stop().await;
}

#[tokio::test]
async fn increment_then_inverse_restores_value() {
    let server = spawn_server(sample_store()).await;
    let client = reqwest::Client::new();

    for delta in [5, -5] {
        let resp = client
            .post(server.url(&format!("/api/counters/3/inc?value={delta}")))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
    }

    let counters = list(&client, &server.url("/api/counters")).await;
    assert_eq!(value_of(&counters, 3), 0);

    server.stop().await;
}

#[tokio::test]
async fn unknown_counter_is_404_and_changes_nothing() {
    let server = spawn_server(sample_store()).await;
    let client = reqwest::Client::new();
    let before = list(&client, &server.url("/api/counters")).await;

    let resp = client
        .post(server.url("/api/counters/99/inc?value=3"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["type"], "not_found");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("99"));
    assert!(body["error"]["request_id"].is_string());

    let after = list(&client, &server.url("/api/counters")).await;
    assert_eq!(before, after);

    server.stop().await;
}

#[tokio::test]
async fn malformed_value_is_400() {
    let server = spawn_server(sample_store()).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(server.url("/api/counters/1/inc?value=lots"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["type"], "invalid_request");

    let resp = client
        .post(server.url("/api/counters/abc/inc"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    server.stop().await;
}

#[tokio::test]
async fn overflow_is_rejected() {
    let store = tallyboard::store::CounterStore::new();
    store.insert_counter("Big", i64::MAX - 1, None).unwrap();
    let server = spawn_server(store).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(server.url("/api/counters/1/inc?value=2"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);

    let counters = list(&client, &server.url("/api/counters")).await;
    assert_eq!(value_of(&counters, 1), i64::MAX - 1);

    server.stop().await;
}

#[tokio::test]
async fn concurrent_increments_are_not_lost() {
    let server = spawn_server(sample_store()).await;
    let client = reqwest::Client::new();

    let a = client
        .post(server.url("/api/counters/2/inc?value=3"))
        .send();
    let b = client
        .post(server.url("/api/counters/2/inc?value=4"))
        .send();
    let (a, b) = tokio::join!(a, b);
    assert_eq!(a.unwrap().status(), 200);
    assert_eq!(b.unwrap().status(), 200);

    let counters = list(&client, &server.url("/api/counters")).await;
    assert_eq!(value_of(&counters, 2), 27);

    server.stop().await;
}

#[tokio::test]
async fn many_parallel_increments_sum_up() {
    let server = spawn_server(sample_store()).await;
    let client = reqwest::Client::new();

    let mut tasks = Vec::new();
    for _ in 0..50 {
        let client = client.clone();
        let url = server.url("/api/counters/3/inc?value=2");
        tasks.push(tokio::spawn(async move {
            client.post(url).send().await.unwrap().status()
        }));
    }
    for task in tasks {
        assert_eq!(task.await.unwrap(), 200);
    }

    let counters = list(&client, &server.url("/api/counters")).await;
    assert_eq!(value_of(&counters, 3), 100);

    server.stop().await;
}

#[tokio::test]
async fn health_reports_service() {
    let server = spawn_server(sample_store()).await;
    let client = reqwest::Client::new();

    let body: Value = client
        .get(server.url("/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "tallyboard");

    server.stop().await;
}

#[tokio::test]
async fn unknown_route_uses_error_shape() {
    let server = spawn_server(sample_store()).await;
    let client = reqwest::Client::new();

    let resp = client
        .get(server.url("/api/nothing"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["type"], "not_found");

    server.stop().await;
}
