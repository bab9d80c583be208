use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::state::FeedFocus;

/// Handle the home feed: browsing, the composer popup, and comment input
pub fn handle_feed_input(key: KeyEvent, app: &mut App) {
    match app.feed.focus {
        FeedFocus::Posts => handle_browse_input(key, app),
        FeedFocus::ComposerText | FeedFocus::ComposerMedia => handle_composer_input(key, app),
        FeedFocus::CommentInput => handle_comment_input(key, app),
    }
}

fn handle_browse_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Down => {
            if !app.feed.posts.is_empty() {
                let current = app.feed.list_state.selected().unwrap_or(0);
                app.feed
                    .list_state
                    .select(Some((current + 1) % app.feed.posts.len()));
            }
        }
        KeyCode::Up => {
            if !app.feed.posts.is_empty() {
                let current = app.feed.list_state.selected().unwrap_or(0);
                app.feed
                    .list_state
                    .select(Some((current + app.feed.posts.len() - 1) % app.feed.posts.len()));
            }
        }
        KeyCode::Char('n') | KeyCode::Char('N') => {
            app.feed.open_composer();
        }
        KeyCode::Char('l') | KeyCode::Char('L') => {
            if let Some(id) = app.feed.cursor_post_id() {
                app.feed.toggle_like(id);
            }
        }
        KeyCode::Char('c') | KeyCode::Char('C') => {
            if let Some(id) = app.feed.cursor_post_id() {
                app.feed.open_comment_input(id);
            }
        }
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.set_notification(
                "Emoji reactions: this feature will be available in the next update!",
            );
        }
        _ => {}
    }
}

fn handle_composer_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char(c) => match app.feed.focus {
            FeedFocus::ComposerText => app.feed.composer_text.push(c),
            FeedFocus::ComposerMedia => app.feed.composer_media.push(c),
            _ => {}
        },
        KeyCode::Backspace => match app.feed.focus {
            FeedFocus::ComposerText => {
                app.feed.composer_text.pop();
            }
            FeedFocus::ComposerMedia => {
                app.feed.composer_media.pop();
            }
            _ => {}
        },
        KeyCode::Tab | KeyCode::BackTab => {
            app.feed.focus = match app.feed.focus {
                FeedFocus::ComposerText => FeedFocus::ComposerMedia,
                _ => FeedFocus::ComposerText,
            };
        }
        KeyCode::Enter => {
            let author = app.current_author();
            let text = app.feed.composer_text.clone();
            let media = app.feed.composer_media.clone();
            let media = (!media.trim().is_empty()).then_some(media);
            let result = app.feed.create_post(
                author,
                &text,
                media.as_deref(),
                Local::now().timestamp(),
            );
            match result {
                Err(e) => app.set_notification(e.to_string()),
                Ok(()) => {
                    app.feed.close_composer();
                    app.set_notification(
                        "Post created! Your post has been shared with the community",
                    );
                }
            }
        }
        KeyCode::Esc => {
            app.feed.close_composer();
        }
        _ => {}
    }
}

fn handle_comment_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char(c) => app.feed.comment_input.push(c),
        KeyCode::Backspace => {
            app.feed.comment_input.pop();
        }
        KeyCode::Enter => {
            if app.feed.comment_input.trim().is_empty() {
                app.set_notification("Empty comment: please write something first");
                return;
            }
            if let Some(id) = app.feed.comment_target {
                let author = app.current_author();
                let text = app.feed.comment_input.clone();
                app.feed
                    .add_comment(id, author, &text, Local::now().timestamp());
            }
            app.feed.close_comment_input();
        }
        KeyCode::Esc => {
            app.feed.close_comment_input();
        }
        _ => {}
    }
}
