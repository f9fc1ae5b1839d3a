use crate::ui::app::App;
use crate::ui::detail::DetailIntent;
use crate::ui::list::ListIntent;
use crate::ui::navigation::Route;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    let on_list = matches!(app.route(), Route::List);
    if on_list {
        handle_list_key(app, key);
    } else {
        handle_detail_key(app, key);
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Up | KeyCode::Char('k') => app.dispatch_list(ListIntent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => app.dispatch_list(ListIntent::MoveDown),
        KeyCode::Enter => app.dispatch_list(ListIntent::Open),
        KeyCode::Char('r') => app.dispatch_list(ListIntent::Load),
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.go_back(),
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            app.dispatch_detail(DetailIntent::InputChar(ch))
        }
        KeyCode::Backspace => app.dispatch_detail(DetailIntent::InputBackspace),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
            app.dispatch_detail(DetailIntent::Increase)
        }
        KeyCode::Char('-') | KeyCode::Left => app.dispatch_detail(DetailIntent::Decrease),
        KeyCode::Char(' ') | KeyCode::Char('u') => app.dispatch_detail(DetailIntent::AddOne),
        KeyCode::Char('r') => app.dispatch_detail(DetailIntent::Load),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
