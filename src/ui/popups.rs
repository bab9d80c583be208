//! Popups: notifications, quit confirmation, preferences.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::global_prefs::global_prefs;

pub fn draw_centered_rect(r: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn draw_notification_popup(f: &mut Frame, message: String) {
    let area = draw_centered_rect(f.area(), 50, 20);
    let block = Block::default()
        .title("Notification")
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Yellow));
    let paragraph = Paragraph::new(message)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);

    let hint_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };
    f.render_widget(
        Paragraph::new(Span::styled(
            " any key to dismiss ",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
        hint_area,
    );
}

pub fn draw_quit_confirm_popup(f: &mut Frame, app: &App) {
    let area = draw_centered_rect(f.area(), 40, 20);
    let block = Block::default()
        .title("Quit?")
        .borders(Borders::ALL)
        .border_type(BorderType::Double);
    f.render_widget(Clear, area);
    f.render_widget(&block, area);
    let inner = block.inner(area);

    let chunks = Layout::default()
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .margin(1)
        .split(inner);
    f.render_widget(
        Paragraph::new("Leave the campus portal?").alignment(Alignment::Center),
        chunks[0],
    );

    let yes_style = if app.ui.quit_confirm_selected == 0 {
        Style::default().bg(Color::Cyan).fg(Color::Black)
    } else {
        Style::default()
    };
    let no_style = if app.ui.quit_confirm_selected == 1 {
        Style::default().bg(Color::Cyan).fg(Color::Black)
    } else {
        Style::default()
    };
    let buttons = Line::from(vec![
        Span::styled("[ Yes ]", yes_style),
        Span::raw("   "),
        Span::styled("[ No ]", no_style),
    ]);
    f.render_widget(
        Paragraph::new(buttons).alignment(Alignment::Center),
        chunks[1],
    );
}

pub fn draw_prefs_popup(f: &mut Frame, app: &App) {
    let area = draw_centered_rect(f.area(), 50, 30);
    let block = Block::default()
        .title("Preferences")
        .borders(Borders::ALL)
        .border_type(BorderType::Double);
    f.render_widget(Clear, area);
    f.render_widget(&block, area);
    let inner = block.inner(area);

    let prefs = global_prefs();
    let entries = [
        ("Banner glitch effect", prefs.banner_glitch_enabled),
        ("Relative timestamps", prefs.relative_timestamps),
    ];

    let mut lines: Vec<Line> = Vec::new();
    for (i, (label, enabled)) in entries.iter().enumerate() {
        let marker = if *enabled { "[x]" } else { "[ ]" };
        let style = if app.ui.prefs_selected == i {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("{} {}", marker, label),
            style,
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Space] toggle | [Esc] close",
        Style::default().fg(Color::DarkGray),
    )));

    f.render_widget(Paragraph::new(lines), inner);
}
