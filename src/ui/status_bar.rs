use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Section tag
    parts.push(Span::styled(
        format!(" [{}] ", state.section.title()),
        Style::default()
            .fg(Theme::ACCENT_TEAL)
            .bg(Theme::BG_ELEVATED)
            .add_modifier(Modifier::BOLD),
    ));

    // Status text
    let status_style = if state.status_message.is_some() {
        Style::default().fg(Theme::ACCENT_AMBER).bg(Theme::BG_ELEVATED)
    } else {
        Theme::status_bar()
    };
    parts.push(Span::styled(format!(" {} ", state.status_line()), status_style));

    let hint = if state.config.ui.show_help {
        help_hint(state)
    } else {
        ""
    };

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + hint.width() + 1);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!("{} ", hint),
        Style::default().fg(Theme::TEXT_SECONDARY).bg(Theme::BG_ELEVATED),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

fn help_hint(state: &AppState) -> &'static str {
    match (&state.modal, state.section) {
        (Some(_), _) => "Esc close",
        (None, Section::Projects) => "↑↓ select  Enter open  Tab switch  q quit",
        (None, Section::Home) => "Enter projects  Tab switch  q quit",
        (None, Section::Goals) => "Tab switch  q quit",
    }
}
