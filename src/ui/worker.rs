//! Network side of the UI.
//!
//! Commands arrive on a tokio channel and run as tasks on the runtime, so the
//! UI thread never waits on the server. Each command reports back exactly one
//! [`AppEvent`]. Commands from separate user actions run concurrently and are
//! not ordered relative to each other.

use std::sync::mpsc::Sender;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::client::{ClientError, CounterClient};
use crate::store::CounterId;
use crate::ui::effect::Screen;
use crate::ui::events::AppEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    FetchCounters { screen: Screen },
    /// Increment, then refetch for detail visit `visit`.
    Increment {
        id: CounterId,
        delta: i64,
        visit: u64,
    },
}

pub type UiCommandSender = mpsc::UnboundedSender<UiCommand>;

pub fn spawn_worker(
    runtime: &Handle,
    client: CounterClient,
    events: Sender<AppEvent>,
) -> UiCommandSender {
    let (tx, mut rx) = mpsc::unbounded_channel::<UiCommand>();

    runtime.spawn(async move {
        while let Some(command) = rx.recv().await {
            let client = client.clone();
            let events = events.clone();
            tokio::spawn(async move {
                let event = execute(&client, command).await;
                if events.send(event).is_err() {
                    tracing::debug!("UI gone, dropping network result");
                }
            });
        }
        tracing::debug!("Network worker stopped");
    });

    tx
}

/// Run one command to completion.
///
/// An increment is strictly sequential: the refetch starts only after the
/// increment call has returned successfully.
pub async fn execute(client: &CounterClient, command: UiCommand) -> AppEvent {
    match command {
        UiCommand::FetchCounters { screen } => match client.list_counters().await {
            Ok(counters) => AppEvent::CountersLoaded { screen, counters },
            Err(err) => failed(screen, err),
        },
        UiCommand::Increment { id, delta, visit } => {
            let screen = Screen::Detail(visit);
            if let Err(err) = client.increment(id, delta).await {
                return failed(screen, err);
            }
            match client.list_counters().await {
                Ok(counters) => AppEvent::CountersLoaded { screen, counters },
                Err(err) => failed(screen, err),
            }
        }
    }
}

fn failed(screen: Screen, err: ClientError) -> AppEvent {
    tracing::warn!(?screen, error = %err, "Network request failed");
    AppEvent::RequestFailed {
        screen,
        message: err.user_message(),
    }
}
