//! Campus selection, the entry screen.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::model::Campus;

pub fn draw_campus_selection(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    f.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                "Welcome to COMSATS University",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("Select your campus to continue"),
        ])
        .alignment(Alignment::Center),
        chunks[0],
    );

    let items: Vec<ListItem> = Campus::ALL
        .iter()
        .map(|campus| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<22}", campus.name()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    campus.email_suffix(),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Campuses"))
        .highlight_style(
            Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");
    f.render_stateful_widget(list, chunks[1], &mut app.ui.campus_list_state);
}
