use crate::client::CounterClient;
use crate::config::ClientConfig;
use crate::ui::app::App;
use crate::ui::events::EventHandler;
use crate::ui::render::draw;
use crate::ui::terminal::TerminalSession;
use crate::ui::worker::spawn_worker;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Run the terminal client against the server in `config` until the user quits.
pub fn run(config: &ClientConfig) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;
    let client = CounterClient::new(config).map_err(|err| io::Error::other(err.to_string()))?;

    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    let commands = spawn_worker(runtime.handle(), client, events.sender());
    let mut app = App::new(commands, config.base_url.clone());

    let mut session = TerminalSession::start()?;
    tracing::info!(server = %config.base_url, "Terminal client started");
    app.start();

    loop {
        session.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => app.on_event(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(session);
    drop(events);
    runtime.shutdown_timeout(Duration::from_secs(1));
    tracing::info!("Terminal client stopped");
    Ok(())
}
