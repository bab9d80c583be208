use crate::app::App;
use crate::global_prefs::global_prefs_mut;
use crate::state::Screen;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle global shortcuts that work across all screens
pub fn handle_global_shortcuts(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.ui.show_quit_confirm = true;
            app.ui.quit_confirm_selected = 1; // Default to "No"
            return true;
        }
        KeyCode::F(9) => {
            app.ui.show_prefs = !app.ui.show_prefs;
            app.ui.prefs_selected = 0;
            return true;
        }
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if app.session.is_authenticated() {
                app.logout();
                return true;
            }
        }
        // Portal navigation, only meaningful once signed in
        KeyCode::F(1) => return navigate(app, Screen::Home),
        KeyCode::F(2) => return navigate(app, Screen::Jobs),
        KeyCode::F(3) => return navigate(app, Screen::Papers),
        KeyCode::F(4) => return navigate(app, Screen::Events),
        KeyCode::F(5) => return navigate(app, Screen::Profile),
        _ => {}
    }
    false
}

fn navigate(app: &mut App, screen: Screen) -> bool {
    if app.session.is_authenticated() {
        app.navigate_to(screen);
        true
    } else {
        false
    }
}

/// Handle the preferences popup
pub fn handle_prefs_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Down => {
            app.ui.prefs_selected = (app.ui.prefs_selected + 1) % 2;
        }
        KeyCode::Up => {
            app.ui.prefs_selected = if app.ui.prefs_selected == 0 { 1 } else { 0 };
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            let mut prefs = global_prefs_mut();
            match app.ui.prefs_selected {
                0 => prefs.banner_glitch_enabled = !prefs.banner_glitch_enabled,
                1 => prefs.relative_timestamps = !prefs.relative_timestamps,
                _ => {}
            }
            prefs.save();
        }
        KeyCode::Esc => {
            app.ui.show_prefs = false;
        }
        _ => {}
    }
}

/// The not-found screen only leads back to the entry screen.
pub fn handle_not_found_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => {
            app.navigate_to(Screen::CampusSelect);
        }
        _ => {}
    }
}
