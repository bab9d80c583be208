use figlet_rs::FIGfont;
use rand::prelude::*;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::global_prefs::global_prefs;

/// Render the COMSATS figlet banner, centered, with an occasional glitched
/// character when the glitch preference is on.
pub fn get_styled_banner_lines(width: u16, tick_count: u64) -> Vec<Line<'static>> {
    let font = match FIGfont::standard() {
        Ok(font) => font,
        Err(_) => return vec![Line::from("COMSATS")],
    };
    let figure = match font.convert("COMSATS") {
        Some(figure) => figure,
        None => return vec![Line::from("COMSATS")],
    };

    let figlet_string = figure.to_string();
    let figlet_lines: Vec<&str> = figlet_string.lines().collect();
    let figlet_width = figlet_lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let pad = (width as usize).saturating_sub(figlet_width) / 2;

    let glitch = global_prefs().banner_glitch_enabled;
    let mut rng = StdRng::seed_from_u64(tick_count / 3);
    const GLITCH_CHARS: [char; 8] = ['#', '%', '/', '\\', '|', '*', '+', ':'];

    figlet_lines
        .iter()
        .map(|line| {
            let mut spans: Vec<Span<'static>> = vec![Span::raw(" ".repeat(pad))];
            for ch in line.chars() {
                if ch == ' ' {
                    spans.push(Span::raw(" "));
                    continue;
                }
                if glitch && rng.gen_ratio(1, 60) {
                    spans.push(Span::styled(
                        GLITCH_CHARS[rng.gen_range(0..GLITCH_CHARS.len())].to_string(),
                        Style::default().fg(Color::Green),
                    ));
                } else {
                    spans.push(Span::styled(
                        ch.to_string(),
                        Style::default().fg(Color::Cyan),
                    ));
                }
            }
            Line::from(spans)
        })
        .collect()
}

/// Single-line header used once the user is past the entry screens.
pub fn min_banner_line(title: &str, campus: Option<&str>) -> Line<'static> {
    let mut spans = vec![Span::styled(
        "COMSATS".to_string(),
        Style::default().fg(Color::Cyan),
    )];
    if let Some(campus) = campus {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            campus.to_string(),
            Style::default().fg(Color::Green),
        ));
    }
    spans.push(Span::raw(" | "));
    spans.push(Span::raw(title.to_string()));
    Line::from(spans)
}
