use crate::app::handler::HERO_ROTATE_TICKS;
use crate::app::state::AppState;
use crate::catalog::{MissionStatus, PROJECTS};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Badges floating around the hero banner, one shown at a time.
const BADGES: [&str; 4] = ["💻 Code", "🎮 Games", "🚀 Ideas", "🤖 Robots"];

fn badge_for(tick_count: u64) -> &'static str {
    let idx = (tick_count / HERO_ROTATE_TICKS) as usize % BADGES.len();
    BADGES[idx]
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let portfolio = &state.config.portfolio;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .style(Style::default().bg(Theme::BG_SURFACE));

    let completed = PROJECTS
        .iter()
        .filter(|p| p.status == MissionStatus::Completed)
        .count();

    let mut lines: Vec<Line> = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("  {}  ", badge_for(state.tick_count)),
            Style::default()
                .fg(Theme::BG_DARK)
                .bg(Theme::ACCENT_AMBER)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            portfolio.title.as_str(),
            Style::default()
                .fg(Theme::ACCENT_TEAL)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            portfolio.tagline.as_str(),
            Theme::text_secondary().add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
    ];

    for dev in &portfolio.developers {
        lines.push(Line::from(vec![
            Span::styled("✦ ", Style::default().fg(Theme::ACCENT_AMBER)),
            Span::styled(dev.as_str(), Theme::title()),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("{} missions complete, more on the way!", completed),
        Style::default().fg(Theme::ACCENT_GREEN),
    )));
    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("Press ", Theme::text_secondary()),
        Span::styled("Enter", Theme::key_hint()),
        Span::styled(" to see our projects", Theme::text_secondary()),
    ]));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        portfolio.credits.as_str(),
        Theme::text_muted(),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
