//! Alumni job portal UI.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::model::{JobPosting, WorkStyle};
use crate::state::PaneFocus;
use crate::ui::popups::draw_centered_rect;

pub fn draw_jobs(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(area);

    let search_style = if app.jobs.focus == PaneFocus::Search {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    f.render_widget(
        Paragraph::new(app.jobs.query.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Search jobs by title, company, or location..."),
            )
            .style(search_style),
        chunks[0],
    );

    let facet_spans: Vec<Span> = [
        ('1', WorkStyle::Hybrid),
        ('2', WorkStyle::Online),
        ('3', WorkStyle::OnSite),
    ]
    .iter()
    .flat_map(|(key, style)| {
        let active = app.jobs.facet == Some(*style);
        let chip_style = if active {
            Style::default().bg(Color::Cyan).fg(Color::Black)
        } else {
            Style::default().fg(Color::Gray)
        };
        vec![
            Span::styled(format!("[{}] {}", key, style.label()), chip_style),
            Span::raw("  "),
        ]
    })
    .collect();
    f.render_widget(Paragraph::new(Line::from(facet_spans)), chunks[1]);

    let filtered = app.jobs.filtered();
    if filtered.is_empty() {
        f.render_widget(
            Paragraph::new("No job opportunities matching your criteria.")
                .block(Block::default().borders(Borders::ALL).title("Job Opportunities")),
            chunks[2],
        );
    } else {
        let items: Vec<ListItem> = filtered
            .iter()
            .map(|job| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<28}", job.title),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw(format!("{:<24}", job.company)),
                    Span::styled(
                        job.style.label(),
                        Style::default().fg(match job.style {
                            WorkStyle::Online => Color::Green,
                            _ => Color::Blue,
                        }),
                    ),
                    Span::styled(
                        format!("  {}", job.location),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Job Opportunities"))
            .highlight_style(
                Style::default()
                    .bg(Color::Cyan)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, chunks[2], &mut app.jobs.list_state);
    }

    if let Some(job) = app.jobs.selected_record() {
        draw_job_detail(f, job);
    }
}

fn draw_job_detail(f: &mut Frame, job: &JobPosting) {
    let area = draw_centered_rect(f.area(), 70, 70);
    let block = Block::default()
        .title(job.title.clone())
        .borders(Borders::ALL)
        .border_type(BorderType::Double);
    f.render_widget(Clear, area);
    f.render_widget(&block, area);
    let inner = block.inner(area);

    let label = |name: &str| Span::styled(format!("{:<16}", name), Style::default().fg(Color::Gray));
    let lines = vec![
        Line::from(vec![
            Span::styled(
                job.company.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                job.style.label(),
                Style::default().fg(match job.style {
                    WorkStyle::Online => Color::Green,
                    _ => Color::Blue,
                }),
            ),
        ]),
        Line::from(""),
        Line::from(vec![label("Salary"), Span::raw(job.salary.clone())]),
        Line::from(vec![label("Location"), Span::raw(job.location.clone())]),
        Line::from(vec![label("Working Hours"), Span::raw(job.working_hours.clone())]),
        Line::from(vec![label("Package"), Span::raw(job.package.clone())]),
        Line::from(vec![label("Qualification"), Span::raw(job.qualification.clone())]),
        Line::from(""),
        Line::from(vec![label("Apply"), Span::raw(job.apply_link.clone())]),
        Line::from(vec![label("Website"), Span::raw(job.website.clone())]),
        Line::from(vec![label("LinkedIn"), Span::raw(job.linkedin.clone())]),
        Line::from(""),
        Line::from(Span::styled(
            "[Esc] close",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
