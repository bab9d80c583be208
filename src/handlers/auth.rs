use std::time::Duration;

use crate::app::{App, AuthOutcome};
use crate::model::Campus;
use crate::services::AuthService;
use crate::state::{AuthFocus, AuthMode, Screen};
use crossterm::event::{KeyCode, KeyEvent};

/// Handle the campus-selection screen
pub fn handle_campus_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Down => {
            let current = app.ui.campus_list_state.selected().unwrap_or(0);
            app.ui
                .campus_list_state
                .select(Some((current + 1) % Campus::ALL.len()));
        }
        KeyCode::Up => {
            let current = app.ui.campus_list_state.selected().unwrap_or(0);
            app.ui
                .campus_list_state
                .select(Some((current + Campus::ALL.len() - 1) % Campus::ALL.len()));
        }
        KeyCode::Enter => {
            if let Some(idx) = app.ui.campus_list_state.selected() {
                let campus = Campus::ALL[idx];
                app.session.select_campus(campus);
                app.set_notification(format!("Campus selected: you've selected {}", campus.name()));
                app.navigate_to(Screen::Auth);
            }
        }
        KeyCode::Esc => {
            app.ui.show_quit_confirm = true;
            app.ui.quit_confirm_selected = 1;
        }
        _ => {}
    }
}

/// Handle the login/signup screen
pub fn handle_auth_input(key: KeyEvent, app: &mut App) {
    // While the simulated sign-in call is in flight only Esc works: it
    // backs out of the screen, which aborts the pending task.
    if app.auth.is_busy() {
        if key.code == KeyCode::Esc {
            app.navigate_to(Screen::CampusSelect);
        }
        return;
    }

    match key.code {
        KeyCode::Char(c) => {
            match app.auth.focus {
                AuthFocus::Name => app.auth.name_input.push(c),
                AuthFocus::Email => app.auth.email_input.push(c),
                AuthFocus::Password => app.auth.password_input.push(c),
                AuthFocus::Confirm => app.auth.confirm_input.push(c),
                _ => {}
            }
        }
        KeyCode::Backspace => {
            match app.auth.focus {
                AuthFocus::Name => {
                    app.auth.name_input.pop();
                }
                AuthFocus::Email => {
                    app.auth.email_input.pop();
                }
                AuthFocus::Password => {
                    app.auth.password_input.pop();
                }
                AuthFocus::Confirm => {
                    app.auth.confirm_input.pop();
                }
                _ => {}
            }
        }
        KeyCode::Tab => app.auth.focus_next(),
        KeyCode::BackTab => app.auth.focus_prev(),
        KeyCode::Enter => match app.auth.focus {
            AuthFocus::Submit => submit(app),
            AuthFocus::Switch => app.auth.switch_mode(),
            _ => app.auth.focus_next(),
        },
        KeyCode::Esc => {
            app.navigate_to(Screen::CampusSelect);
        }
        _ => {}
    }
}

fn submit(app: &mut App) {
    let campus = app.session.selected_campus();
    let name = app.auth.name_input.clone();
    let email = app.auth.email_input.clone();
    let password = app.auth.password_input.clone();
    let confirm = app.auth.confirm_input.clone();

    let checked = match app.auth.mode {
        AuthMode::Login => AuthService::validate_login(&email, &password, campus),
        AuthMode::Signup => {
            AuthService::validate_signup(&name, &email, &password, &confirm, campus)
        }
    };

    match checked {
        Err(message) => app.set_notification(message),
        Ok(()) => {
            let outcome = AuthOutcome {
                mode: app.auth.mode,
                name,
                email,
            };
            let handle = AuthService::spawn_auth_delay(
                app.events_tx.clone(),
                outcome,
                Duration::from_millis(app.config.auth_delay_ms),
            );
            app.auth.pending = Some(handle);
        }
    }
}
