use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let bg = Theme::BG_ELEVATED;
    let mut parts: Vec<Span> = vec![
        Span::styled(" 🦀 ", Style::default().fg(Theme::ACCENT_TEAL).bg(bg)),
        Span::styled(
            state.config.portfolio.title.as_str(),
            Style::default()
                .fg(Theme::TEXT_PRIMARY)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", Style::default().fg(Theme::BORDER_DIM).bg(bg)),
    ];

    for (i, section) in Section::ALL.iter().enumerate() {
        let style = if *section == state.section {
            Style::default()
                .fg(Theme::BG_DARK)
                .bg(Theme::ACCENT_TEAL)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Theme::TEXT_SECONDARY).bg(bg)
        };
        parts.push(Span::styled(
            format!(" {} ", i + 1),
            Style::default().fg(Theme::ACCENT_AMBER).bg(bg),
        ));
        parts.push(Span::styled(format!(" {} ", section.title()), style));
        parts.push(Span::styled(" ", Style::default().bg(bg)));
    }

    frame.render_widget(Paragraph::new(Line::from(parts)).style(Theme::nav_bar()), area);
}
