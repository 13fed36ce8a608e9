use crate::catalog::{self, ProjectId};
use crate::ui::project_list::tech_line;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

pub fn render(frame: &mut Frame, area: Rect, id: ProjectId) {
    let Some(project) = catalog::find(id) else {
        frame.render_widget(
            Paragraph::new(Span::styled("Project not found", Theme::failure())),
            area,
        );
        return;
    };

    let lines = vec![
        Line::default(),
        Line::from(vec![
            Span::raw(format!("{} ", project.icon())),
            Span::styled(
                project.title,
                Style::default()
                    .fg(Theme::ACCENT_TEAL)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            project.status.headline(),
            Theme::mission(project.status).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(project.description, Theme::text())),
        Line::default(),
        tech_line(project),
        Line::default(),
        Line::from(vec![
            Span::styled("Difficulty ", Theme::text_secondary()),
            Span::styled(project.stars(), Theme::stars()),
            Span::styled("   ", Theme::text()),
            Span::styled(project.level_label(), Style::default().fg(Theme::ACCENT_AMBER)),
        ]),
        Line::default(),
        Line::from(Span::styled("Our story", Theme::title())),
        Line::from(Span::styled(
            project.story(),
            Theme::text_secondary().add_modifier(Modifier::ITALIC),
        )),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}
