//! Main UI module. Re-exports submodules and provides the main entry point.

pub mod auth;
pub mod campus;
pub mod events;
pub mod feed;
pub mod jobs;
pub mod not_found;
pub mod papers;
pub mod popups;
pub mod profile;
pub mod time_format;

use ratatui::Frame;

use crate::app::App;
use crate::banner;
use crate::state::Screen;
use crate::ui::popups::{draw_notification_popup, draw_prefs_popup, draw_quit_confirm_popup};

pub fn ui(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let use_full_banner = matches!(app.ui.screen, Screen::CampusSelect | Screen::Auth);
    let banner_height = if use_full_banner { 8 } else { 1 };

    let chunks = ratatui::layout::Layout::default()
        .constraints([
            ratatui::layout::Constraint::Length(banner_height),
            ratatui::layout::Constraint::Min(0),
            ratatui::layout::Constraint::Length(3),
        ])
        .split(size);

    if use_full_banner {
        let lines = banner::get_styled_banner_lines(chunks[0].width, app.ui.tick_count);
        f.render_widget(ratatui::widgets::Paragraph::new(lines), chunks[0]);
    } else {
        let campus = app.session.selected_campus().map(|c| c.name());
        f.render_widget(
            ratatui::widgets::Paragraph::new(banner::min_banner_line(
                app.ui.screen.title(),
                campus,
            )),
            chunks[0],
        );
    }

    let help_text = match app.ui.screen {
        Screen::CampusSelect => "[Up/Down] Choose | [Enter] Select | [F9] Prefs | [Ctrl+C] Quit",
        Screen::Auth => "[Tab] Change Focus | [Enter] Select/Submit | [Esc] Back | [Ctrl+C] Quit",
        Screen::Home => {
            "[N]ew Post | [L]ike | [C]omment | [E]moji | [F1-F5] Screens | [Ctrl+L] Logout"
        }
        Screen::Jobs => {
            "[Tab] Search/List | [1][2][3] Style Filter | [Enter] Details | [F1-F5] Screens"
        }
        Screen::Papers => {
            "[Tab] Search/List | [1][2] Exam Filter | [U]pload | [D]ownload | [F1-F5] Screens"
        }
        Screen::Events => {
            "[Tab] Search/List | [1][2] Type Filter | [Enter] Details | [F1-F5] Screens"
        }
        Screen::Profile => "[E]dit | [D]ownload CV | [F1-F5] Screens | [Ctrl+L] Logout",
        Screen::NotFound => "[Enter]/[Esc] Back to start",
    };
    let status_text = if app.session.is_authenticated() {
        format!("Logged in as: {}", app.session.profile.name)
    } else if let Some(campus) = app.session.selected_campus() {
        campus.name().to_string()
    } else {
        "Not signed in".to_string()
    };

    let footer_chunks = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            ratatui::layout::Constraint::Percentage(67),
            ratatui::layout::Constraint::Percentage(33),
        ])
        .split(chunks[2]);

    f.render_widget(
        ratatui::widgets::Paragraph::new(help_text)
            .wrap(ratatui::widgets::Wrap { trim: true })
            .block(ratatui::widgets::Block::default().borders(ratatui::widgets::Borders::TOP)),
        footer_chunks[0],
    );
    f.render_widget(
        ratatui::widgets::Paragraph::new(ratatui::text::Span::styled(
            status_text,
            ratatui::style::Style::default().fg(ratatui::style::Color::Yellow),
        ))
        .alignment(ratatui::layout::Alignment::Right)
        .block(ratatui::widgets::Block::default().borders(ratatui::widgets::Borders::TOP)),
        footer_chunks[1],
    );

    let main_area = chunks[1];
    match app.ui.screen {
        Screen::CampusSelect => campus::draw_campus_selection(f, app, main_area),
        Screen::Auth => auth::draw_auth(f, app, main_area),
        Screen::Home => feed::draw_feed(f, app, main_area),
        Screen::Jobs => jobs::draw_jobs(f, app, main_area),
        Screen::Papers => papers::draw_papers(f, app, main_area),
        Screen::Events => events::draw_events(f, app, main_area),
        Screen::Profile => profile::draw_profile(f, app, main_area),
        Screen::NotFound => not_found::draw_not_found(f, main_area),
    }

    if let Some(message) = app.notifications.current() {
        draw_notification_popup(f, message.to_string());
    }
    if app.ui.show_prefs {
        draw_prefs_popup(f, app);
    }
    if app.ui.show_quit_confirm {
        draw_quit_confirm_popup(f, app);
    }
}
