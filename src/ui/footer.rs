use crate::ui::navigation::Route;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const LIST_HINTS: &str = " ↑/↓: Move │ Enter: Open │ r: Reload │ q: Quit";
const DETAIL_HINTS: &str = " 0-9: Amount │ +/-: Apply │ Space: +1 │ r: Reload │ Esc: Back";

pub fn hints(route: &Route) -> &'static str {
    match route {
        Route::List => LIST_HINTS,
        Route::Counter(_) => DETAIL_HINTS,
    }
}

pub struct Footer<'a> {
    route: &'a Route,
}

impl<'a> Footer<'a> {
    pub fn new(route: &'a Route) -> Self {
        Self { route }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = hints(self.route);
        let version = format!("v{} ", VERSION);

        // char count, not bytes: the hints contain arrows and box characters
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
