//! Network commands executed against a live server.

mod common;

use common::{sample_store, spawn_server, unreachable_base_url};
use tallyboard::client::CounterClient;
use tallyboard::config::ClientConfig;
use tallyboard::store::CounterId;
use tallyboard::ui::effect::Screen;
use tallyboard::ui::events::AppEvent;
use tallyboard::ui::worker::{execute, spawn_worker, UiCommand};

#[tokio::test]
async fn fetch_reports_counters_for_the_screen() {
    let server = spawn_server(sample_store()).await;
    let client = CounterClient::new(&server.client_config()).unwrap();

    let event = execute(
        &client,
        UiCommand::FetchCounters {
            screen: Screen::List,
        },
    )
    .await;
    match event {
        AppEvent::CountersLoaded { screen, counters } => {
            assert_eq!(screen, Screen::List);
            assert_eq!(counters.len(), 3);
        }
        _ => panic!("expected CountersLoaded"),
    }

    server.stop().await;
}

#[tokio::test]
async fn increment_then_refetch() {
    let server = spawn_server(sample_store()).await;
    let client = CounterClient::new(&server.client_config()).unwrap();

    let event = execute(
        &client,
        UiCommand::Increment {
            id: CounterId(2),
            delta: 5,
            visit: 1,
        },
    )
    .await;
    match event {
        AppEvent::CountersLoaded { screen, counters } => {
            assert_eq!(screen, Screen::Detail(1));
            let coffee = counters
                .iter()
                .find(|c| c.counter_id == CounterId(2))
                .unwrap();
            assert_eq!(coffee.value, 25);
        }
        _ => panic!("expected CountersLoaded"),
    }

    server.stop().await;
}

#[tokio::test]
async fn failed_increment_skips_refetch() {
    let server = spawn_server(sample_store()).await;
    let client = CounterClient::new(&server.client_config()).unwrap();

    let event = execute(
        &client,
        UiCommand::Increment {
            id: CounterId(99),
            delta: 1,
            visit: 2,
        },
    )
    .await;
    match event {
        AppEvent::RequestFailed { screen, message } => {
            assert_eq!(screen, Screen::Detail(2));
            assert_eq!(message, "Counter not found");
        }
        _ => panic!("expected RequestFailed"),
    }

    server.stop().await;
}

#[tokio::test]
async fn unreachable_server_reports_failure() {
    let config = ClientConfig {
        base_url: unreachable_base_url(),
        ..ClientConfig::default()
    };
    let client = CounterClient::new(&config).unwrap();

    let event = execute(
        &client,
        UiCommand::FetchCounters {
            screen: Screen::List,
        },
    )
    .await;
    assert!(matches!(
        event,
        AppEvent::RequestFailed {
            screen: Screen::List,
            ..
        }
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn spawned_worker_delivers_events() {
    let server = spawn_server(sample_store()).await;
    let client = CounterClient::new(&server.client_config()).unwrap();
    let (events_tx, events_rx) = std::sync::mpsc::channel();

    let commands = spawn_worker(&tokio::runtime::Handle::current(), client, events_tx);
    commands
        .send(UiCommand::FetchCounters {
            screen: Screen::Detail(7),
        })
        .unwrap();

    let event = tokio::task::spawn_blocking(move || {
        events_rx.recv_timeout(std::time::Duration::from_secs(5))
    })
    .await
    .unwrap()
    .expect("worker did not answer");
    assert!(matches!(
        event,
        AppEvent::CountersLoaded {
            screen: Screen::Detail(7),
            ..
        }
    ));

    server.stop().await;
}
