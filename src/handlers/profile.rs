use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::services::ProfileService;
use crate::state::ProfileEditFocus;

/// Handle the profile screen, viewing and editing
pub fn handle_profile_input(key: KeyEvent, app: &mut App) {
    if !app.profile.editing {
        match key.code {
            KeyCode::Char('e') | KeyCode::Char('E') => {
                let profile = app.session.profile.clone();
                app.profile.begin_edit(&profile);
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                if !app.session.profile.cv.is_empty() {
                    let cv = app.session.profile.cv.clone();
                    app.set_notification(format!("Downloading {}", cv));
                }
            }
            _ => {}
        }
        return;
    }

    handle_edit_input(key, app);
}

fn handle_edit_input(key: KeyEvent, app: &mut App) {
    use ProfileEditFocus::*;

    match key.code {
        KeyCode::Tab | KeyCode::Down => app.profile.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.profile.focus_prev(),
        KeyCode::Char(c) => match app.profile.focus {
            Name => app.profile.draft.name.push(c),
            Bio => app.profile.draft.bio.push(c),
            RegNumber => app.profile.draft.reg_number.push(c),
            Batch => app.profile.draft.batch.push(c),
            Degree => app.profile.draft.degree.push(c),
            NewSkill => app.profile.new_skill.push(c),
            NewInterest => app.profile.new_interest.push(c),
            Avatar => app.profile.avatar_input.push(c),
            Cv => app.profile.cv_input.push(c),
            _ => {}
        },
        KeyCode::Backspace => match app.profile.focus {
            Name => {
                app.profile.draft.name.pop();
            }
            Bio => {
                app.profile.draft.bio.pop();
            }
            RegNumber => {
                app.profile.draft.reg_number.pop();
            }
            Batch => {
                app.profile.draft.batch.pop();
            }
            Degree => {
                app.profile.draft.degree.pop();
            }
            NewSkill => {
                app.profile.new_skill.pop();
            }
            NewInterest => {
                app.profile.new_interest.pop();
            }
            Avatar => {
                app.profile.avatar_input.pop();
            }
            Cv => {
                app.profile.cv_input.pop();
            }
            _ => {}
        },
        // Drop the most recent tag while its input field is focused
        KeyCode::Delete => match app.profile.focus {
            NewSkill => {
                if let Some(skill) = app.profile.draft.skills.last().cloned() {
                    app.profile.draft.remove_skill(&skill);
                }
            }
            NewInterest => {
                if let Some(interest) = app.profile.draft.interests.last().cloned() {
                    app.profile.draft.remove_interest(&interest);
                }
            }
            _ => {}
        },
        KeyCode::Enter => match app.profile.focus {
            NewSkill => {
                let skill = app.profile.new_skill.clone();
                if app.profile.draft.add_skill(&skill) {
                    app.profile.new_skill.clear();
                }
            }
            NewInterest => {
                let interest = app.profile.new_interest.clone();
                if app.profile.draft.add_interest(&interest) {
                    app.profile.new_interest.clear();
                }
            }
            Save => save_profile(app),
            Cancel => app.profile.cancel_edit(),
            _ => app.profile.focus_next(),
        },
        KeyCode::Esc => app.profile.cancel_edit(),
        _ => {}
    }
}

fn save_profile(app: &mut App) {
    // Resolve the upload inputs into the draft before validating
    let avatar_input = app.profile.avatar_input.clone();
    if !avatar_input.trim().is_empty() {
        match ProfileService::file_to_data_ref(&avatar_input) {
            Ok(Some(data)) => app.profile.draft.avatar = data,
            Ok(None) => {}
            Err(e) => {
                let message = e.to_string();
                app.profile.edit_error = Some(message.clone());
                app.set_notification(message);
                return;
            }
        }
    }
    let cv_input = app.profile.cv_input.clone();
    if let Some(file_name) = ProfileService::cv_display_name(&cv_input) {
        app.profile.draft.cv = file_name;
    }

    if let Err(message) = ProfileService::validate_profile(&app.profile.draft) {
        app.profile.edit_error = Some(message.clone());
        app.set_notification(message);
        return;
    }

    let profile = app.profile.take_draft();
    app.session.replace_profile(profile);
    app.set_notification("Profile updated: your profile information has been saved");
}
