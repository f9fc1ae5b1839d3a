//! Raw mode and the alternate screen, held for the lifetime of a
//! [`TerminalSession`].

use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};

/// Owns the terminal while the client runs.
///
/// The terminal is restored exactly once: when the session drops, or from the
/// panic hook if the UI thread panics first.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    restore: Restore,
}

impl TerminalSession {
    pub fn start() -> io::Result<Self> {
        enable_raw_mode()?;
        let restore = Restore::new(leave_terminal);

        let terminal = match enter_screen()
            .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())))
        {
            Ok(terminal) => terminal,
            Err(err) => {
                restore.run();
                return Err(err);
            }
        };

        install_panic_hook(restore.clone());
        Ok(Self { terminal, restore })
    }

    pub fn draw(&mut self, render: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(render).map(|_| ())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.restore.run();
    }
}

/// One-shot restore action shared between the session and the panic hook.
#[derive(Clone)]
struct Restore {
    pending: Arc<AtomicBool>,
    action: fn(),
}

impl Restore {
    fn new(action: fn()) -> Self {
        Self {
            pending: Arc::new(AtomicBool::new(true)),
            action,
        }
    }

    fn run(&self) {
        if self.pending.swap(false, Ordering::SeqCst) {
            (self.action)();
        }
    }
}

fn enter_screen() -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;
    Ok(())
}

fn leave_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

fn install_panic_hook(restore: Restore) {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore.run();
        previous(info);
    }));
}
