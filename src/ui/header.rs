use crate::ui::navigation::Route;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    route: &'a Route,
    server: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(route: &'a Route, server: &'a str) -> Self {
        Self { route, server }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title = match self.route {
            Route::List => "Counters",
            Route::Counter(_) => "Counter",
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "tallyboard",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(title, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.server.to_string(), separator_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
