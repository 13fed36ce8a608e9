use crate::catalog::{Goal, GOALS, SECRET_MISSION};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const BAR_WIDTH: usize = 20;

pub fn render(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Future Goals ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());

    let mut lines: Vec<Line> = Vec::new();
    for goal in GOALS.iter() {
        lines.extend(goal_lines(goal));
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        SECRET_MISSION,
        Style::default()
            .fg(Theme::ACCENT_LAVENDER)
            .add_modifier(Modifier::ITALIC),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn goal_lines(goal: &Goal) -> [Line<'static>; 3] {
    [
        Line::from(vec![
            Span::styled(format!("{} ", goal.icon), Theme::text()),
            Span::styled(goal.title, Theme::title()),
            Span::styled(
                format!("  Unlocks at level {}", goal.unlock_level),
                Style::default().fg(Theme::ACCENT_AMBER),
            ),
        ]),
        Line::from(Span::styled(
            format!("   {}", goal.description),
            Theme::text_secondary(),
        )),
        Line::from(vec![
            Span::styled(
                format!("   {}", progress_bar(goal.progress)),
                Style::default().fg(Theme::ACCENT_TEAL),
            ),
            Span::styled(format!(" {}%", goal.progress), Theme::text_muted()),
        ]),
    ]
}

fn progress_bar(percent: u8) -> String {
    let filled = usize::from(percent.min(100)) * BAR_WIDTH / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0), "░".repeat(BAR_WIDTH));
        assert_eq!(progress_bar(100), "█".repeat(BAR_WIDTH));
        assert_eq!(progress_bar(250), "█".repeat(BAR_WIDTH));
        assert_eq!(progress_bar(20).chars().filter(|c| *c == '█').count(), 4);
    }
}
