//! Authentication (login/signup) UI screens.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::services::AuthService;
use crate::state::{AuthFocus, AuthMode};

pub fn draw_auth(f: &mut Frame, app: &mut App, area: Rect) {
    let is_login = app.auth.mode == AuthMode::Login;
    let campus_name = app
        .session
        .selected_campus()
        .map(|c| c.name())
        .unwrap_or("COMSATS University");
    let title = if is_login {
        format!("{} | Sign in to your account", campus_name)
    } else {
        format!("{} | Create a new account", campus_name)
    };
    let outer_block = Block::default().title(title).borders(Borders::ALL);
    f.render_widget(&outer_block, area);

    let mut constraints = vec![];
    if !is_login {
        constraints.push(Constraint::Length(3)); // name
    }
    constraints.push(Constraint::Length(3)); // email
    constraints.push(Constraint::Length(1)); // email hint
    constraints.push(Constraint::Length(3)); // password
    if !is_login {
        constraints.push(Constraint::Length(3)); // confirm
    }
    constraints.push(Constraint::Min(1)); // buttons
    let chunks = Layout::default()
        .margin(2)
        .constraints(constraints)
        .split(area);

    let field_style = |focus: AuthFocus| {
        if app.auth.focus == focus {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        }
    };

    let mut idx = 0;
    if !is_login {
        f.render_widget(
            Paragraph::new(app.auth.name_input.as_str())
                .block(Block::default().borders(Borders::ALL).title("Full Name"))
                .style(field_style(AuthFocus::Name)),
            chunks[idx],
        );
        idx += 1;
    }

    f.render_widget(
        Paragraph::new(app.auth.email_input.as_str())
            .block(Block::default().borders(Borders::ALL).title("Email Address"))
            .style(field_style(AuthFocus::Email)),
        chunks[idx],
    );
    idx += 1;

    let suffix = AuthService::email_suffix(app.session.selected_campus());
    f.render_widget(
        Paragraph::new(Span::styled(
            format!("Use your {} email address (example{})", campus_name, suffix),
            Style::default().fg(Color::DarkGray),
        )),
        chunks[idx],
    );
    idx += 1;

    f.render_widget(
        Paragraph::new("*".repeat(app.auth.password_input.len()))
            .block(Block::default().borders(Borders::ALL).title("Password"))
            .style(field_style(AuthFocus::Password)),
        chunks[idx],
    );
    idx += 1;

    if !is_login {
        f.render_widget(
            Paragraph::new("*".repeat(app.auth.confirm_input.len()))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("Confirm Password"),
                )
                .style(field_style(AuthFocus::Confirm)),
            chunks[idx],
        );
        idx += 1;
    }

    let button_area = Layout::default()
        .margin(1)
        .constraints([Constraint::Length(3)])
        .split(chunks[idx])[0];
    let button_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(button_area);

    let submit_label = if app.auth.is_busy() {
        "[ Processing... ]"
    } else if is_login {
        "[ Sign In ]"
    } else {
        "[ Create Account ]"
    };
    let submit_style = if app.auth.focus == AuthFocus::Submit {
        Style::default().bg(Color::Cyan).fg(Color::Black)
    } else {
        Style::default()
    };
    f.render_widget(
        Paragraph::new(Span::styled(submit_label, submit_style)).alignment(Alignment::Center),
        button_chunks[0],
    );

    let switch_label = if is_login {
        "[ Need an account? Sign up ]"
    } else {
        "[ Already have an account? Sign in ]"
    };
    let switch_style = if app.auth.focus == AuthFocus::Switch {
        Style::default().bg(Color::Magenta).fg(Color::Black)
    } else {
        Style::default()
    };
    f.render_widget(
        Paragraph::new(Span::styled(switch_label, switch_style)).alignment(Alignment::Center),
        button_chunks[1],
    );

    let cursor_target = match app.auth.focus {
        AuthFocus::Name if !is_login => Some((0, app.auth.name_input.len())),
        AuthFocus::Email => Some((if is_login { 0 } else { 1 }, app.auth.email_input.len())),
        AuthFocus::Password => Some((
            if is_login { 2 } else { 3 },
            app.auth.password_input.len(),
        )),
        AuthFocus::Confirm if !is_login => Some((4, app.auth.confirm_input.len())),
        _ => None,
    };
    if let Some((chunk_idx, len)) = cursor_target {
        f.set_cursor_position((
            chunks[chunk_idx].x + len as u16 + 1,
            chunks[chunk_idx].y + 1,
        ));
    }
}
