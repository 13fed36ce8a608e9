use crate::app::state::AppState;
use crate::catalog::{MissionStatus, Project, PROJECTS};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    // Horizontal: mission list | selected card
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Length(34), Constraint::Min(30)])
        .split(area);

    render_list(frame, chunks[0], state);
    if let Some(project) = state.selected_project() {
        render_card(frame, chunks[1], project);
    }
}

fn render_list(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Our Missions ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused());

    let lines: Vec<Line> = PROJECTS
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let marker = match project.status {
                MissionStatus::Completed => "✔",
                MissionStatus::Upcoming => "…",
                MissionStatus::Locked => "🔒",
            };
            let text = format!(" {} {} {}", marker, project.icon(), project.title);
            if i == state.catalog.selected {
                Line::from(Span::styled(text, Theme::selected()))
            } else {
                Line::from(Span::styled(text, Theme::mission(project.status)))
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_card(frame: &mut Frame, area: Rect, project: &Project) {
    let block = Block::default()
        .title(format!(" {} {} ", project.icon(), project.level_label()))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Style::default().bg(Theme::BG_SURFACE));

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(project.title, Theme::title())),
        Line::from(Span::styled(
            project.status.label(),
            Theme::mission(project.status).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(project.description, Theme::text())),
        Line::default(),
        tech_line(project),
        Line::default(),
        Line::from(vec![
            Span::styled("Difficulty: ", Theme::text_secondary()),
            Span::styled(project.stars(), Theme::stars()),
        ]),
        Line::default(),
    ];

    match project.action_label() {
        Some(label) => lines.push(Line::from(vec![
            Span::styled("Enter", Theme::key_hint()),
            Span::styled(format!(" {}", label), Style::default().fg(Theme::ACCENT_TEAL)),
        ])),
        None => lines.push(Line::from(Span::styled(
            "🔒 Reach a higher level to unlock",
            Theme::text_muted(),
        ))),
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Tech tags as a row of chips.
pub fn tech_line(project: &Project) -> Line<'static> {
    let mut spans = Vec::with_capacity(project.tech.len() * 2);
    for tag in project.tech {
        spans.push(Span::styled(format!(" {} ", tag), Theme::tech_tag()));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}
