//! Profile screen: academic info, tags, documents, and the edit form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::model::Profile;
use crate::state::ProfileEditFocus;

pub fn draw_profile(f: &mut Frame, app: &mut App, area: Rect) {
    if app.profile.editing {
        draw_edit_form(f, app, area);
    } else {
        draw_view(f, &app.session.profile, area);
    }
}

fn draw_view(f: &mut Frame, profile: &Profile, area: Rect) {
    let chunks = Layout::default()
        .constraints([Constraint::Length(6), Constraint::Min(1)])
        .split(area);

    let header = vec![
        Line::from(vec![
            Span::styled(
                format!("[{}] ", profile.avatar_label()),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                profile.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            if profile.email.is_empty() {
                "no email on record".to_string()
            } else {
                profile.email.clone()
            },
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(profile.bio.clone()),
        Line::from(Span::styled(
            if profile.avatar.is_empty() {
                "no profile picture"
            } else {
                "profile picture on file"
            },
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(
        Paragraph::new(header)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("My Profile | [E]dit")),
        chunks[0],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let academic = vec![
        Line::from(vec![
            Span::styled("Registration  ", Style::default().fg(Color::Gray)),
            Span::raw(profile.reg_number.clone()),
        ]),
        Line::from(vec![
            Span::styled("Batch         ", Style::default().fg(Color::Gray)),
            Span::raw(profile.batch.clone()),
        ]),
        Line::from(vec![
            Span::styled("Degree        ", Style::default().fg(Color::Gray)),
            Span::raw(profile.degree.clone()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("CV/Resume     ", Style::default().fg(Color::Gray)),
            Span::raw(if profile.cv.is_empty() {
                "No CV uploaded".to_string()
            } else {
                profile.cv.clone()
            }),
        ]),
    ];
    f.render_widget(
        Paragraph::new(academic).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Academic Information"),
        ),
        columns[0],
    );

    let tag_line = |tags: &[String]| {
        if tags.is_empty() {
            Line::from(Span::styled(
                "none added yet",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(
                tags.iter()
                    .flat_map(|tag| {
                        vec![
                            Span::styled(
                                format!("({})", tag),
                                Style::default().fg(Color::Green),
                            ),
                            Span::raw(" "),
                        ]
                    })
                    .collect::<Vec<_>>(),
            )
        }
    };
    let tags = vec![
        Line::from(Span::styled(
            "Skills",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        tag_line(&profile.skills),
        Line::from(""),
        Line::from(Span::styled(
            "Interests",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        tag_line(&profile.interests),
    ];
    f.render_widget(
        Paragraph::new(tags)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Skills & Interests")),
        columns[1],
    );
}

fn draw_edit_form(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Edit Profile | [Enter] on Save/Cancel to finish");
    f.render_widget(&block, area);
    let inner = block.inner(area);

    let draft = &app.profile.draft;
    let focus = app.profile.focus;
    let field_style = |target: ProfileEditFocus| {
        if focus == target {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Full Name:     ", field_style(ProfileEditFocus::Name)),
            Span::raw(draft.name.clone()),
        ]),
        Line::from(vec![
            Span::styled("Bio:           ", field_style(ProfileEditFocus::Bio)),
            Span::raw(draft.bio.clone()),
        ]),
        Line::from(vec![
            Span::styled("Registration:  ", field_style(ProfileEditFocus::RegNumber)),
            Span::raw(draft.reg_number.clone()),
        ]),
        Line::from(vec![
            Span::styled("Batch:         ", field_style(ProfileEditFocus::Batch)),
            Span::raw(draft.batch.clone()),
        ]),
        Line::from(vec![
            Span::styled("Degree:        ", field_style(ProfileEditFocus::Degree)),
            Span::raw(draft.degree.clone()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Add Skill:     ", field_style(ProfileEditFocus::NewSkill)),
            Span::raw(app.profile.new_skill.clone()),
            Span::styled(
                format!("   current: {}", draft.skills.join(", ")),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(vec![
            Span::styled("Add Interest:  ", field_style(ProfileEditFocus::NewInterest)),
            Span::raw(app.profile.new_interest.clone()),
            Span::styled(
                format!("   current: {}", draft.interests.join(", ")),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::styled(
            "               [Enter] add tag | [Del] remove last",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Avatar file:   ", field_style(ProfileEditFocus::Avatar)),
            Span::raw(app.profile.avatar_input.clone()),
        ]),
        Line::from(vec![
            Span::styled("CV file:       ", field_style(ProfileEditFocus::Cv)),
            Span::raw(app.profile.cv_input.clone()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("[ Save Changes ]", field_style(ProfileEditFocus::Save)),
            Span::raw("   "),
            Span::styled("[ Cancel ]", field_style(ProfileEditFocus::Cancel)),
        ]),
    ];

    if let Some(error) = &app.profile.edit_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
