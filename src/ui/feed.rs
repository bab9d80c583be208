//! Home feed UI: post cards, the composer popup, and comment input.

use chrono::Local;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::global_prefs::global_prefs;
use crate::model::Media;
use crate::state::FeedFocus;
use crate::ui::popups::draw_centered_rect;
use crate::ui::time_format::format_timestamp;

pub fn draw_feed(f: &mut Frame, app: &mut App, area: Rect) {
    let now = Local::now();
    let relative = global_prefs().relative_timestamps;

    let items: Vec<ListItem> = app
        .feed
        .posts
        .iter()
        .map(|post| {
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    format!("[{}] ", post.author.avatar),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    post.author.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", format_timestamp(post.timestamp, now, relative)),
                    Style::default().fg(Color::DarkGray),
                ),
            ])];
            lines.push(Line::from(post.body.clone()));
            match &post.media {
                Some(Media::Image(reference)) => {
                    lines.push(Line::from(Span::styled(
                        format!("[image] {}", reference),
                        Style::default().fg(Color::Magenta),
                    )));
                }
                Some(Media::Video(reference)) => {
                    lines.push(Line::from(Span::styled(
                        format!("[video] {}", reference),
                        Style::default().fg(Color::Magenta),
                    )));
                }
                None => {}
            }
            let heart = if post.user_liked { "\u{2665}" } else { "\u{2661}" };
            lines.push(Line::from(Span::styled(
                format!(
                    "{} {}   {} comment{}",
                    heart,
                    post.likes,
                    post.comments.len(),
                    if post.comments.len() == 1 { "" } else { "s" }
                ),
                Style::default().fg(if post.user_liked {
                    Color::Red
                } else {
                    Color::Gray
                }),
            )));
            for comment in &post.comments {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(
                        format!("[{}] {}: ", comment.author.avatar, comment.author.name),
                        Style::default().fg(Color::Green),
                    ),
                    Span::raw(comment.body.clone()),
                    Span::styled(
                        format!("  {}", format_timestamp(comment.timestamp, now, relative)),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]));
            }
            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Home Feed | [N]ew Post"),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(">> ");
    f.render_stateful_widget(list, area, &mut app.feed.list_state);

    if app.feed.composer_open {
        draw_composer_popup(f, app);
    }
    if app.feed.comment_target.is_some() {
        draw_comment_popup(f, app);
    }
}

fn draw_composer_popup(f: &mut Frame, app: &App) {
    let area = draw_centered_rect(f.area(), 60, 40);
    let block = Block::default()
        .title("Create Post")
        .borders(Borders::ALL)
        .border_type(BorderType::Double);
    f.render_widget(Clear, area);
    f.render_widget(&block, area);
    let inner = block.inner(area);

    let chunks = Layout::default()
        .constraints([
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .margin(1)
        .split(inner);

    let text_style = if app.feed.focus == FeedFocus::ComposerText {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    f.render_widget(
        Paragraph::new(app.feed.composer_text.as_str())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("What's on your mind?"),
            )
            .style(text_style),
        chunks[0],
    );

    let media_style = if app.feed.focus == FeedFocus::ComposerMedia {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    f.render_widget(
        Paragraph::new(app.feed.composer_media.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Photo/Video (optional)"),
            )
            .style(media_style),
        chunks[1],
    );

    f.render_widget(
        Paragraph::new(Span::styled(
            "[Tab] switch field | [Enter] post | [Esc] cancel",
            Style::default().fg(Color::DarkGray),
        )),
        chunks[2],
    );
}

fn draw_comment_popup(f: &mut Frame, app: &App) {
    let area = draw_centered_rect(f.area(), 60, 20);
    let block = Block::default()
        .title("Write a comment...")
        .borders(Borders::ALL)
        .border_type(BorderType::Double);
    let input = Paragraph::new(app.feed.comment_input.as_str())
        .wrap(Wrap { trim: true })
        .block(block);
    f.render_widget(Clear, area);
    f.render_widget(input, area);

    let inner = Block::default().borders(Borders::ALL).inner(area);
    let cursor_x = inner.x + (app.feed.comment_input.len() as u16).min(inner.width.saturating_sub(1));
    f.set_cursor_position((cursor_x, inner.y));
}
