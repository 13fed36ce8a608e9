//! Project catalog: the portfolio's projects framed as game missions.
//!
//! Selecting a project resolves to a [`ProjectAction`]: projects that ship a
//! playable game open that game, the rest open a details card, and locked
//! missions cannot be opened at all.

mod goals;
mod projects;

pub use goals::{Goal, GOALS, SECRET_MISSION};
pub use projects::PROJECTS;

use crate::games::GameKind;

pub type ProjectId = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionStatus {
    Completed,
    Upcoming,
    Locked,
}

impl MissionStatus {
    /// Short label for the catalog card.
    pub fn label(self) -> &'static str {
        match self {
            MissionStatus::Completed => "Mission Complete",
            MissionStatus::Upcoming => "Next Mission",
            MissionStatus::Locked => "Mission Locked",
        }
    }

    /// Headline used in the details card.
    pub fn headline(self) -> &'static str {
        match self {
            MissionStatus::Completed => "Mission complete!",
            MissionStatus::Upcoming => "Next mission",
            MissionStatus::Locked => "Mission locked",
        }
    }
}

#[derive(Debug)]
pub struct Project {
    pub id: ProjectId,
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub status: MissionStatus,
    /// Difficulty in stars, 1-5.
    pub difficulty: u8,
    pub level: u8,
    pub game: Option<GameKind>,
    pub story: Option<&'static str>,
}

const DEFAULT_STORY: &str =
    "This is one of our special projects! Every project teaches us something new about programming.";

impl Project {
    pub fn stars(&self) -> String {
        "★".repeat(usize::from(self.difficulty))
    }

    pub fn level_label(&self) -> String {
        format!("Level {}", self.level)
    }

    pub fn story(&self) -> &'static str {
        self.story.unwrap_or(DEFAULT_STORY)
    }

    /// Icon picked from keywords in the title, first match wins.
    pub fn icon(&self) -> &'static str {
        const KEYWORDS: &[(&str, &str)] = &[
            ("Website", "🌐"),
            ("Game", "🎮"),
            ("App", "📱"),
            ("Robot", "🤖"),
            ("Arduino", "⚡"),
        ];
        KEYWORDS
            .iter()
            .find(|(word, _)| self.title.contains(word))
            .map(|(_, icon)| *icon)
            .unwrap_or("💻")
    }

    /// Call to action shown on the card, `None` for locked missions.
    pub fn action_label(&self) -> Option<&'static str> {
        action_for(self).map(|action| match action {
            ProjectAction::PlayGame(_) => "Play now →",
            ProjectAction::ShowDetails(_) => "View details →",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectAction {
    PlayGame(GameKind),
    ShowDetails(ProjectId),
}

/// What opening `project` does.
pub fn action_for(project: &Project) -> Option<ProjectAction> {
    if project.status == MissionStatus::Locked {
        return None;
    }
    Some(match project.game {
        Some(kind) => ProjectAction::PlayGame(kind),
        None => ProjectAction::ShowDetails(project.id),
    })
}

pub fn find(id: ProjectId) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}
