//! Society events UI.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::app::App;
use crate::model::{EventKind, SocietyEvent};
use crate::state::PaneFocus;
use crate::ui::popups::draw_centered_rect;

pub fn draw_events(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(area);

    let search_style = if app.events.focus == PaneFocus::Search {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    f.render_widget(
        Paragraph::new(app.events.query.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Search events, societies or campus..."),
            )
            .style(search_style),
        chunks[0],
    );

    let tab_index = match app.events.facet {
        None => 0,
        Some(EventKind::Physical) => 1,
        Some(EventKind::Online) => 2,
    };
    let tabs = Tabs::new(vec!["All Events", "[1] Physical Events", "[2] Online Events"])
        .select(tab_index)
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, chunks[1]);

    let filtered = app.events.filtered();
    if filtered.is_empty() {
        f.render_widget(
            Paragraph::new("No events matching your search criteria.")
                .block(Block::default().borders(Borders::ALL).title("Upcoming Events")),
            chunks[2],
        );
    } else {
        let items: Vec<ListItem> = filtered
            .iter()
            .map(|event| {
                let place = match event.kind {
                    EventKind::Physical => format!("{}, {}", event.location, event.campus),
                    EventKind::Online => "Virtual Event".to_string(),
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(
                            event.title.clone(),
                            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!("  [{}]", event.kind.label()),
                            Style::default().fg(match event.kind {
                                EventKind::Online => Color::Green,
                                EventKind::Physical => Color::Blue,
                            }),
                        ),
                    ]),
                    Line::from(vec![
                        Span::raw(format!("{:<32}", event.society)),
                        Span::styled(
                            format!("{} ({}) | {} | {}", event.date, event.day, event.time, place),
                            Style::default().fg(Color::DarkGray),
                        ),
                    ]),
                ])
            })
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Upcoming Events"))
            .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, chunks[2], &mut app.events.list_state);
    }

    if let Some(event) = app.events.selected_record() {
        draw_event_detail(f, event);
    }
}

fn draw_event_detail(f: &mut Frame, event: &SocietyEvent) {
    let area = draw_centered_rect(f.area(), 70, 70);
    let block = Block::default()
        .title(event.title.clone())
        .borders(Borders::ALL)
        .border_type(BorderType::Double);
    f.render_widget(Clear, area);
    f.render_widget(&block, area);
    let inner = block.inner(area);

    let label = |name: &str| Span::styled(format!("{:<12}", name), Style::default().fg(Color::Gray));
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                event.society.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  [{}]", event.kind.label()),
                Style::default().fg(match event.kind {
                    EventKind::Online => Color::Green,
                    EventKind::Physical => Color::Blue,
                }),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            label("When"),
            Span::raw(format!("{} ({}) | {}", event.date, event.day, event.time)),
        ]),
    ];
    match event.kind {
        EventKind::Physical => {
            lines.push(Line::from(vec![
                label("Where"),
                Span::raw(format!("{}, {}", event.location, event.campus)),
            ]));
        }
        EventKind::Online => {
            lines.push(Line::from(vec![
                label("Where"),
                Span::raw(format!("Virtual Event ({})", event.campus)),
            ]));
            if !event.join_link.is_empty() {
                lines.push(Line::from(vec![
                    label("Join"),
                    Span::raw(event.join_link.clone()),
                ]));
            }
        }
    }
    lines.push(Line::from(vec![
        label("Poster"),
        Span::styled(event.image.clone(), Style::default().fg(Color::Magenta)),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Event Details:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(event.details.clone()));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        if event.kind == EventKind::Online && !event.join_link.is_empty() {
            "Join via the link above | [Esc] close"
        } else {
            "Register to attend at the venue | [Esc] close"
        },
        Style::default().fg(Color::DarkGray),
    )));

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
