use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::model::{EventKind, ExamType, Listing, WorkStyle};
use crate::state::{Directory, PaneFocus, Screen, UploadFocus};

/// Search-box keys shared by every directory screen.
fn handle_search_keys<R: Listing>(key: KeyEvent, dir: &mut Directory<R>) -> bool {
    match key.code {
        KeyCode::Char(c) => {
            dir.push_query_char(c);
            true
        }
        KeyCode::Backspace => {
            dir.pop_query_char();
            true
        }
        KeyCode::Tab | KeyCode::Enter | KeyCode::Down => {
            dir.focus = PaneFocus::List;
            true
        }
        _ => false,
    }
}

/// List-pane keys shared by every directory screen.
fn handle_list_nav_keys<R: Listing>(key: KeyEvent, dir: &mut Directory<R>) -> bool {
    match key.code {
        KeyCode::Down => {
            dir.cursor_down();
            true
        }
        KeyCode::Up => {
            dir.cursor_up();
            true
        }
        KeyCode::Enter => {
            dir.select_at_cursor();
            true
        }
        KeyCode::Tab => {
            dir.focus = PaneFocus::Search;
            true
        }
        _ => false,
    }
}

/// Esc backs out one level: close the query, then leave for the feed.
fn handle_escape<R: Listing>(app_screen: &mut Option<Screen>, dir: &mut Directory<R>) {
    if dir.query.is_empty() {
        *app_screen = Some(Screen::Home);
    } else {
        dir.query.clear();
    }
}

// --- Alumni job portal ---

pub fn handle_jobs_input(key: KeyEvent, app: &mut App) {
    if app.jobs.selected_id().is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            app.jobs.deselect();
        }
        return;
    }

    let mut leave = None;
    match app.jobs.focus {
        PaneFocus::Search => {
            if handle_search_keys(key, &mut app.jobs) {
                return;
            }
            if key.code == KeyCode::Esc {
                handle_escape(&mut leave, &mut app.jobs);
            }
        }
        PaneFocus::List => {
            if handle_list_nav_keys(key, &mut app.jobs) {
                return;
            }
            match key.code {
                KeyCode::Char('1') => app.jobs.toggle_facet(WorkStyle::Hybrid),
                KeyCode::Char('2') => app.jobs.toggle_facet(WorkStyle::Online),
                KeyCode::Char('3') => app.jobs.toggle_facet(WorkStyle::OnSite),
                KeyCode::Esc => handle_escape(&mut leave, &mut app.jobs),
                _ => {}
            }
        }
    }
    if let Some(screen) = leave {
        app.navigate_to(screen);
    }
}

// --- Past papers ---

pub fn handle_papers_input(key: KeyEvent, app: &mut App) {
    if app.papers.upload_open {
        handle_upload_input(key, app);
        return;
    }

    if app.papers.directory.selected_id().is_some() {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => app.papers.directory.deselect(),
            KeyCode::Char('d') | KeyCode::Char('D') => {
                let label = app
                    .papers
                    .directory
                    .selected_record()
                    .map(|p| format!("{} {}", p.course_code, p.exam_type.label()));
                if let Some(label) = label {
                    app.set_notification(format!(
                        "Downloading paper: {} paper is being downloaded",
                        label
                    ));
                }
            }
            _ => {}
        }
        return;
    }

    let mut leave = None;
    match app.papers.directory.focus {
        PaneFocus::Search => {
            if handle_search_keys(key, &mut app.papers.directory) {
                return;
            }
            if key.code == KeyCode::Esc {
                handle_escape(&mut leave, &mut app.papers.directory);
            }
        }
        PaneFocus::List => {
            if handle_list_nav_keys(key, &mut app.papers.directory) {
                return;
            }
            match key.code {
                KeyCode::Char('1') => app.papers.directory.toggle_facet(ExamType::Midterm),
                KeyCode::Char('2') => app.papers.directory.toggle_facet(ExamType::Final),
                KeyCode::Char('u') | KeyCode::Char('U') => app.papers.open_upload(),
                KeyCode::Char('d') | KeyCode::Char('D') => {
                    let cursor = app
                        .papers
                        .directory
                        .list_state
                        .selected()
                        .and_then(|idx| app.papers.directory.filtered().get(idx).copied())
                        .map(|p| format!("{} {}", p.course_code, p.exam_type.label()));
                    if let Some(label) = cursor {
                        app.set_notification(format!(
                            "Downloading paper: {} paper is being downloaded",
                            label
                        ));
                    }
                }
                KeyCode::Esc => handle_escape(&mut leave, &mut app.papers.directory),
                _ => {}
            }
        }
    }
    if let Some(screen) = leave {
        app.navigate_to(screen);
    }
}

fn handle_upload_input(key: KeyEvent, app: &mut App) {
    let form = &mut app.papers.upload;
    match key.code {
        KeyCode::Char(c) => match form.focus {
            UploadFocus::CourseCode => form.course_code.push(c),
            UploadFocus::CourseName => form.course_name.push(c),
            UploadFocus::File => form.file.push(c),
            _ => {}
        },
        KeyCode::Backspace => match form.focus {
            UploadFocus::CourseCode => {
                form.course_code.pop();
            }
            UploadFocus::CourseName => {
                form.course_name.pop();
            }
            UploadFocus::File => {
                form.file.pop();
            }
            _ => {}
        },
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Left => form.cycle_select(false),
        KeyCode::Right => form.cycle_select(true),
        KeyCode::Enter => match form.focus {
            UploadFocus::ExamType | UploadFocus::Semester | UploadFocus::Year => {
                form.cycle_select(true)
            }
            UploadFocus::Cancel => app.papers.close_upload(),
            UploadFocus::Submit => match app.papers.submit_upload() {
                Err(message) => app.set_notification(format!("Missing information: {}", message)),
                Ok(()) => app.set_notification(
                    "Past paper submitted: your submission will be reviewed by an administrator before publication",
                ),
            },
            _ => form.focus_next(),
        },
        KeyCode::Esc => app.papers.close_upload(),
        _ => {}
    }
}

// --- Society events ---

pub fn handle_events_input(key: KeyEvent, app: &mut App) {
    if app.events.selected_id().is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
            app.events.deselect();
        }
        return;
    }

    let mut leave = None;
    match app.events.focus {
        PaneFocus::Search => {
            if handle_search_keys(key, &mut app.events) {
                return;
            }
            if key.code == KeyCode::Esc {
                handle_escape(&mut leave, &mut app.events);
            }
        }
        PaneFocus::List => {
            if handle_list_nav_keys(key, &mut app.events) {
                return;
            }
            match key.code {
                KeyCode::Char('1') => app.events.toggle_facet(EventKind::Physical),
                KeyCode::Char('2') => app.events.toggle_facet(EventKind::Online),
                KeyCode::Esc => handle_escape(&mut leave, &mut app.events),
                _ => {}
            }
        }
    }
    if let Some(screen) = leave {
        app.navigate_to(screen);
    }
}
