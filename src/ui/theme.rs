use crate::catalog::MissionStatus;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BG_DARK: Color = Color::Rgb(18, 20, 28);
    pub const BG_SURFACE: Color = Color::Rgb(26, 29, 40);
    pub const BG_ELEVATED: Color = Color::Rgb(36, 40, 54);
    pub const BORDER_DIM: Color = Color::Rgb(68, 74, 94);

    pub const TEXT_PRIMARY: Color = Color::Rgb(226, 230, 240);
    pub const TEXT_SECONDARY: Color = Color::Rgb(150, 158, 180);
    pub const TEXT_MUTED: Color = Color::Rgb(96, 102, 122);

    pub const ACCENT_TEAL: Color = Color::Rgb(72, 209, 204);
    pub const ACCENT_AMBER: Color = Color::Rgb(255, 191, 71);
    pub const ACCENT_GREEN: Color = Color::Rgb(120, 220, 120);
    pub const ACCENT_LAVENDER: Color = Color::Rgb(180, 160, 255);
    pub const ACCENT_RED: Color = Color::Rgb(240, 100, 100);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn text_secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected() -> Style {
        Style::default()
            .fg(Self::BG_DARK)
            .bg(Self::ACCENT_TEAL)
            .add_modifier(Modifier::BOLD)
    }

    pub fn stars() -> Style {
        Style::default().fg(Self::ACCENT_AMBER)
    }

    pub fn tech_tag() -> Style {
        Style::default()
            .fg(Self::ACCENT_LAVENDER)
            .bg(Self::BG_ELEVATED)
    }

    pub fn mission(status: MissionStatus) -> Style {
        match status {
            MissionStatus::Completed => Style::default().fg(Self::ACCENT_GREEN),
            MissionStatus::Upcoming => Style::default().fg(Self::ACCENT_AMBER),
            MissionStatus::Locked => Style::default().fg(Self::TEXT_MUTED),
        }
    }

    pub fn success() -> Style {
        Style::default()
            .fg(Self::ACCENT_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn failure() -> Style {
        Style::default()
            .fg(Self::ACCENT_RED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_bar() -> Style {
        Style::default().bg(Self::BG_ELEVATED)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Self::BG_ELEVATED)
    }
}
