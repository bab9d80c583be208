//! Past papers repository UI: tabbed list, detail, and the contribute dialog.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Tabs},
    Frame,
};

use crate::app::App;
use crate::model::ExamType;
use crate::state::listing::{SEMESTERS, YEARS};
use crate::state::{PaneFocus, UploadFocus};
use crate::ui::popups::draw_centered_rect;

pub fn draw_papers(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    let search_style = if app.papers.directory.focus == PaneFocus::Search {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    f.render_widget(
        Paragraph::new(app.papers.directory.query.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Search by course code or name..."),
            )
            .style(search_style),
        chunks[0],
    );

    let tab_index = match app.papers.directory.facet {
        None => 0,
        Some(ExamType::Midterm) => 1,
        Some(ExamType::Final) => 2,
    };
    let tabs = Tabs::new(vec!["All Papers", "[1] Midterm Exams", "[2] Final Exams"])
        .select(tab_index)
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, chunks[1]);

    let filtered = app.papers.directory.filtered();
    if filtered.is_empty() {
        f.render_widget(
            Paragraph::new("No papers matching your search criteria.").block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Past Papers Repository | [U]pload"),
            ),
            chunks[2],
        );
    } else {
        let items: Vec<ListItem> = filtered
            .iter()
            .map(|paper| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<8}", paper.course_code),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw(format!("{:<42}", paper.course_name)),
                    Span::styled(
                        format!("{:<8}", paper.exam_type.label()),
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(
                        format!("{} {}  by {} on {}", paper.semester, paper.year, paper.uploaded_by, paper.date_uploaded),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Past Papers Repository | [U]pload"),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Cyan)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, chunks[2], &mut app.papers.directory.list_state);
    }

    // Contributions wait on review; nothing here ever publishes itself.
    let pending = app.papers.pending.len();
    if pending > 0 {
        f.render_widget(
            Paragraph::new(Span::styled(
                format!(
                    "{} submission{} awaiting administrator review",
                    pending,
                    if pending == 1 { "" } else { "s" }
                ),
                Style::default().fg(Color::Yellow),
            )),
            chunks[3],
        );
    }

    if let Some(paper) = app.papers.directory.selected_record() {
        draw_paper_detail(f, paper);
    }
    if app.papers.upload_open {
        draw_upload_popup(f, app);
    }
}

fn draw_paper_detail(f: &mut Frame, paper: &crate::model::PastPaper) {
    let area = draw_centered_rect(f.area(), 60, 50);
    let block = Block::default()
        .title(format!("{} | {}", paper.course_code, paper.course_name))
        .borders(Borders::ALL)
        .border_type(BorderType::Double);
    f.render_widget(Clear, area);
    f.render_widget(&block, area);
    let inner = block.inner(area);

    let label = |name: &str| Span::styled(format!("{:<14}", name), Style::default().fg(Color::Gray));
    let lines = vec![
        Line::from(vec![
            label("Exam"),
            Span::raw(format!("{} Exam", paper.exam_type.label())),
        ]),
        Line::from(vec![
            label("Session"),
            Span::raw(format!("{} {}", paper.semester, paper.year)),
        ]),
        Line::from(vec![
            label("Uploaded by"),
            Span::raw(format!("{} on {}", paper.uploaded_by, paper.date_uploaded)),
        ]),
        Line::from(vec![label("File"), Span::raw(paper.file_url.clone())]),
        Line::from(""),
        Line::from(Span::styled(
            "[D]ownload | [Esc] close",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}

fn draw_upload_popup(f: &mut Frame, app: &App) {
    let area = draw_centered_rect(f.area(), 60, 70);
    let block = Block::default()
        .title("Upload Past Paper")
        .borders(Borders::ALL)
        .border_type(BorderType::Double);
    f.render_widget(Clear, area);
    f.render_widget(&block, area);
    let inner = block.inner(area);

    let form = &app.papers.upload;
    let field_style = |focus: UploadFocus| {
        if form.focus == focus {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    };
    let select_value = |value: Option<&str>| value.unwrap_or("Select").to_string();

    let lines = vec![
        Line::from(Span::styled(
            "Your submission will be reviewed by an administrator.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Course Code:  ", field_style(UploadFocus::CourseCode)),
            Span::raw(if form.course_code.is_empty() {
                "e.g., CSC354".to_string()
            } else {
                form.course_code.clone()
            }),
        ]),
        Line::from(vec![
            Span::styled("Course Name:  ", field_style(UploadFocus::CourseName)),
            Span::raw(if form.course_name.is_empty() {
                "e.g., Machine Learning".to_string()
            } else {
                form.course_name.clone()
            }),
        ]),
        Line::from(vec![
            Span::styled("Exam Type:    ", field_style(UploadFocus::ExamType)),
            Span::raw(format!(
                "< {} >",
                select_value(form.exam_type.map(|t| t.label()))
            )),
        ]),
        Line::from(vec![
            Span::styled("Semester:     ", field_style(UploadFocus::Semester)),
            Span::raw(format!(
                "< {} >",
                select_value(form.semester.map(|i| SEMESTERS[i]))
            )),
        ]),
        Line::from(vec![
            Span::styled("Year:         ", field_style(UploadFocus::Year)),
            Span::raw(format!("< {} >", select_value(form.year.map(|i| YEARS[i])))),
        ]),
        Line::from(vec![
            Span::styled("File (PDF):   ", field_style(UploadFocus::File)),
            Span::raw(form.file.clone()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("[ Submit for Review ]", field_style(UploadFocus::Submit)),
            Span::raw("   "),
            Span::styled("[ Cancel ]", field_style(UploadFocus::Cancel)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "[Tab] next field | [Left/Right] change selection | [Esc] cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(Paragraph::new(lines), inner);
}
