use crate::store::Counter;
use crate::ui::app::App;
use crate::ui::detail::DetailState;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{detail_regions, layout_regions};
use crate::ui::list::ListState;
use crate::ui::navigation::Route;
use crate::ui::theme::{
    ACCENT, ACCENT_SOFT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT,
    STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Clear, List, ListItem, ListState as WidgetListState, Paragraph,
};
use ratatui::Frame;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(Header::new(app.route(), app.server()).widget(), header);
    frame.render_widget(Clear, body);
    match app.route() {
        Route::List => draw_list(frame, app.list(), app.ticks(), body),
        Route::Counter(_) => draw_detail(frame, app.detail(), app.ticks(), body),
    }
    frame.render_widget(Footer::new(app.route()).widget(footer), footer);
}

fn spinner(ticks: u64) -> &'static str {
    SPINNER[(ticks % SPINNER.len() as u64) as usize]
}

fn body_block(title: &'static str) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn draw_list(frame: &mut Frame<'_>, state: &ListState, ticks: u64, area: Rect) {
    let block = body_block(" Counters ");

    if state.counters.is_empty() {
        let line = if let Some(error) = &state.error {
            error_line(error)
        } else if state.loading {
            Line::from(format!("{} Loading counters", spinner(ticks)))
        } else {
            Line::from("No counters").style(Style::default().fg(HEADER_SEPARATOR))
        };
        frame.render_widget(
            Paragraph::new(line).alignment(Alignment::Center).block(block),
            area,
        );
        return;
    }

    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = state
        .counters
        .iter()
        .map(|counter| ListItem::new(counter_row(counter, width)))
        .collect();
    let title = match (&state.error, state.loading) {
        (Some(_), _) => " Counters (stale) ",
        (None, true) => " Counters (refreshing) ",
        (None, false) => " Counters ",
    };
    let list = List::new(items)
        .block(body_block(title))
        .highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .fg(ACCENT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut selection = WidgetListState::default().with_selected(Some(state.cursor));
    frame.render_stateful_widget(list, area, &mut selection);

    if let Some(error) = &state.error {
        draw_status_line(frame, area, error_line(error));
    }
}

fn counter_row(counter: &Counter, width: usize) -> Line<'static> {
    let name = counter.counter_name.clone();
    let group = counter
        .group
        .as_ref()
        .map(|group| format!("  [{}]", group.group_name))
        .unwrap_or_default();
    let value = counter.value.to_string();
    let used = name.chars().count() + group.chars().count() + value.len() + 2;
    let padding = width.saturating_sub(used);

    Line::from(vec![
        Span::styled(name, Style::default().fg(HEADER_TEXT)),
        Span::styled(group, Style::default().fg(HEADER_SEPARATOR)),
        Span::raw(" ".repeat(padding)),
        Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
    ])
}

fn draw_detail(frame: &mut Frame<'_>, state: &DetailState, ticks: u64, area: Rect) {
    let Some(counter) = &state.selected else {
        let line = match &state.error {
            Some(error) => error_line(error),
            None => Line::from(format!("{} Loading counter", spinner(ticks))),
        };
        frame.render_widget(
            Paragraph::new(line)
                .alignment(Alignment::Center)
                .block(body_block(" Counter ")),
            area,
        );
        return;
    };

    frame.render_widget(body_block(" Counter "), area);
    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    let [value_area, input_area, actions_area, status_area] = detail_regions(inner);

    let mut heading = vec![Span::styled(
        counter.counter_name.clone(),
        Style::default().fg(HEADER_TEXT),
    )];
    if let Some(group) = &counter.group {
        heading.push(Span::styled(
            format!("  [{}]", group.group_name),
            Style::default().fg(HEADER_SEPARATOR),
        ));
    }
    let value = Paragraph::new(vec![
        Line::from(heading),
        Line::from(""),
        Line::from(Span::styled(
            counter.value.to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(value, value_area);

    let input_box = Rect {
        x: input_area.x + input_area.width.saturating_sub(20) / 2,
        y: input_area.y,
        width: input_area.width.min(20),
        height: input_area.height,
    };
    let input = Paragraph::new(state.input_value.clone()).block(
        Block::default()
            .title(" Amount ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT_SOFT)),
    );
    frame.render_widget(input, input_box);
    if input_box.width > 2 && input_box.height > 2 {
        let typed = state.input_value.chars().count() as u16;
        let x = input_box.x + 1 + typed.min(input_box.width.saturating_sub(3));
        frame.set_cursor_position(Position::new(x, input_box.y + 1));
    }

    let magnitude = state.magnitude();
    let actions = Line::from(vec![
        Span::styled(format!("[-] -{magnitude}"), Style::default().fg(STATUS_ERROR)),
        Span::raw("    "),
        Span::styled(format!("[+] +{magnitude}"), Style::default().fg(STATUS_OK)),
        Span::raw("    "),
        Span::styled("[space] +1", Style::default().fg(ACCENT_SOFT)),
    ]);
    frame.render_widget(
        Paragraph::new(actions).alignment(Alignment::Center),
        actions_area,
    );

    let status = match (&state.error, state.in_flight) {
        (Some(error), _) => error_line(error),
        (None, true) => Line::from(format!("{} Updating", spinner(ticks))),
        (None, false) => Line::from(""),
    };
    frame.render_widget(
        Paragraph::new(status).alignment(Alignment::Center),
        status_area,
    );
}

fn error_line(message: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("{message} (r to retry)"),
        Style::default().fg(STATUS_ERROR),
    ))
}

fn draw_status_line(frame: &mut Frame<'_>, area: Rect, line: Line<'static>) {
    if area.height < 3 {
        return;
    }
    let row = Rect {
        x: area.x + 1,
        y: area.y + area.height - 2,
        width: area.width.saturating_sub(2),
        height: 1,
    };
    frame.render_widget(Clear, row);
    frame.render_widget(Paragraph::new(line), row);
}
