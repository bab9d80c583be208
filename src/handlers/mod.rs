pub mod auth;
pub mod feed;
pub mod listings;
pub mod navigation;
pub mod profile;

use crate::app::App;
use crate::state::Screen;
use crossterm::event::KeyEvent;

/// Main input handler dispatcher
pub fn handle_key_event(key: KeyEvent, app: &mut App) {
    // Quit confirmation has the highest priority
    if app.ui.show_quit_confirm {
        handle_quit_confirm_input(key, app);
        return;
    }

    if navigation::handle_global_shortcuts(key, app) {
        return;
    }

    if app.ui.show_prefs {
        navigation::handle_prefs_input(key, app);
        return;
    }

    // Any key dismisses an active notification
    if app.notifications.current().is_some() {
        app.notifications.clear();
        return;
    }

    match app.ui.screen {
        Screen::CampusSelect => auth::handle_campus_input(key, app),
        Screen::Auth => auth::handle_auth_input(key, app),
        Screen::Home => feed::handle_feed_input(key, app),
        Screen::Jobs => listings::handle_jobs_input(key, app),
        Screen::Papers => listings::handle_papers_input(key, app),
        Screen::Events => listings::handle_events_input(key, app),
        Screen::Profile => profile::handle_profile_input(key, app),
        Screen::NotFound => navigation::handle_not_found_input(key, app),
    }
}

fn handle_quit_confirm_input(key: KeyEvent, app: &mut App) {
    use crossterm::event::{KeyCode, KeyModifiers};

    match key.code {
        KeyCode::Left | KeyCode::Right => {
            app.ui.quit_confirm_selected = if app.ui.quit_confirm_selected == 0 { 1 } else { 0 };
        }
        KeyCode::Enter => {
            if app.ui.quit_confirm_selected == 0 {
                app.ui.quit();
            }
            app.ui.show_quit_confirm = false;
        }
        KeyCode::Esc => {
            app.ui.show_quit_confirm = false;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.ui.show_quit_confirm = false;
        }
        _ => {}
    }
}
