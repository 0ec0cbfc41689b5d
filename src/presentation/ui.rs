use crate::application::{App, AppMode, Focus, Notification, NotificationLevel, TextInput};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

const LABEL_WIDTH: u16 = 16;

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_form(f, app, chunks[1]);
    render_results(f, app, chunks[2]);
    render_status_bar(f, app, chunks[3]);

    if let AppMode::Notification(ref notification) = app.mode {
        render_notification_popup(f, notification);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("FormulaSpeed - Average Speed Calculator")
        .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().bg(Color::Blue).fg(Color::White)
    } else {
        Style::default()
    }
}

fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Input");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    render_field(f, app, lines[0], "Distance (km):", &app.distance, Focus::Distance);
    render_field(f, app, lines[1], "Time (hours):", &app.time, Focus::Time);

    let buttons = Line::from(vec![
        Span::styled(
            "[ Calculate Average Speed ]",
            focus_style(app.focus == Focus::CalculateButton).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            "[ Save to Spreadsheet ]",
            focus_style(app.focus == Focus::SaveButton).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(buttons), lines[2]);
}

fn render_field(f: &mut Frame, app: &App, area: Rect, label: &str, input: &TextInput, focus: Focus) {
    let focused = app.focus == focus;
    let line = Line::from(vec![
        Span::styled(
            format!("{label:<width$}", width = LABEL_WIDTH as usize),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(input.value.clone(), focus_style(focused)),
    ]);
    f.render_widget(Paragraph::new(line), area);

    if focused && app.mode == AppMode::Ready {
        let x = cursor_column(area, input.cursor);
        f.set_cursor_position((x, area.y));
    }
}

/// Terminal column of the text cursor, clamped to the field's line.
fn cursor_column(area: Rect, cursor: usize) -> u16 {
    let offset = u16::try_from(cursor).unwrap_or(u16::MAX);
    area.x
        .saturating_add(LABEL_WIDTH)
        .saturating_add(offset)
        .min(area.right().saturating_sub(1))
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let grid = app.results.to_grid();
    let (header, body) = grid.split_first().map(|(h, b)| (h.clone(), b)).unwrap_or_default();

    let header_row = Row::new(
        header
            .into_iter()
            .map(|h| Cell::from(h).style(Style::default().fg(Color::Yellow))),
    )
    .height(1);
    let rows = body.iter().map(|cells| Row::new(cells.iter().cloned().map(Cell::from)));

    let border_style = if app.focus == Focus::Table {
        Style::default().fg(Color::LightBlue)
    } else {
        Style::default()
    };
    let table = Table::new(
        rows,
        [Constraint::Percentage(33), Constraint::Percentage(33), Constraint::Percentage(34)],
    )
    .header(header_row)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!("Results ({})", app.results.len())),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray))
    .column_spacing(1);

    let mut state = TableState::default().with_selected(app.selected_result);
    f.render_stateful_widget(table, area, &mut state);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let hint = match app.mode {
        AppMode::Ready => {
            "Tab/Shift+Tab: move | Enter: calculate | Ctrl+S: save to results.xlsx | Esc/Ctrl+Q: quit"
        }
        AppMode::Notification(_) => "Enter/Esc: dismiss",
    };
    let status = Paragraph::new(hint).block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, area);
}

fn render_notification_popup(f: &mut Frame, notification: &Notification) {
    let area = f.area();
    let width = (area.width * 3 / 5).max(20).min(area.width);
    let height = 5.min(area.height);
    let popup_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let color = match notification.level {
        NotificationLevel::Info => Color::Green,
        NotificationLevel::Error => Color::Red,
    };

    f.render_widget(Clear, popup_area);
    let popup = Paragraph::new(vec![
        Line::from(notification.message.as_str()),
        Line::from(""),
        Line::from(Span::styled("[ OK ]", Style::default().add_modifier(Modifier::BOLD))),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(notification.title())
            .style(Style::default().fg(color)),
    );
    f.render_widget(popup, popup_area);
}
