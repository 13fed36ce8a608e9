use crate::catalog::{self, Project, ProjectAction, ProjectId, PROJECTS};
use crate::config::AppConfig;
use crate::games::{ActiveGame, GameKind};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Top-level page sections, in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Projects,
    Goals,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Home, Section::Projects, Section::Goals];

    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Projects => "Projects",
            Section::Goals => "Goals",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Section::Home => 0,
            Section::Projects => 1,
            Section::Goals => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// What the modal host is showing.
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    Game(ActiveGame),
    Details(ProjectId),
}

impl Modal {
    pub fn title(&self) -> &'static str {
        match self {
            Modal::Game(game) => game.kind().title(),
            Modal::Details(id) => catalog::find(*id).map(|p| p.title).unwrap_or("Project"),
        }
    }
}

/// Cursor over the project catalog.
#[derive(Debug, Default)]
pub struct CatalogState {
    pub selected: usize,
}

impl CatalogState {
    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self, total: usize) {
        if self.selected + 1 < total {
            self.selected += 1;
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub section: Section,
    pub catalog: CatalogState,
    pub modal: Option<Modal>,
    pub rng: StdRng,
    pub should_quit: bool,
    pub dirty: bool,
    pub pending_bell: bool,
    pub tick_count: u64,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let seed = config
            .games
            .seed
            .unwrap_or_else(|| rand::rng().random_range(0..u64::MAX));
        let section = config.ui.start_section;
        Self {
            config,
            section,
            catalog: CatalogState::default(),
            modal: None,
            rng: StdRng::seed_from_u64(seed),
            should_quit: false,
            dirty: true,
            pending_bell: false,
            tick_count: 0,
            status_message: None,
        }
    }

    pub fn set_section(&mut self, section: Section) {
        self.section = section;
        self.status_message = None;
        self.dirty = true;
    }

    pub fn selected_project(&self) -> Option<&'static Project> {
        PROJECTS.get(self.catalog.selected)
    }

    pub fn select_next_project(&mut self) {
        self.catalog.move_down(PROJECTS.len());
        self.dirty = true;
    }

    pub fn select_prev_project(&mut self) {
        self.catalog.move_up();
        self.dirty = true;
    }

    /// Open the highlighted project. See [`AppState::open_project`].
    pub fn open_selected_project(&mut self) -> bool {
        match self.selected_project() {
            Some(project) => self.open_project(project),
            None => false,
        }
    }

    /// Dispatch a project into the modal host: a fresh engine for game
    /// projects, the details card otherwise. Ignored while a modal is open
    /// and for locked projects.
    pub fn open_project(&mut self, project: &Project) -> bool {
        if self.modal.is_some() {
            return false;
        }
        let Some(action) = catalog::action_for(project) else {
            self.status_message = Some(format!("\"{}\" is still locked", project.title));
            self.dirty = true;
            return false;
        };
        match action {
            ProjectAction::PlayGame(kind) => self.open_game(kind),
            ProjectAction::ShowDetails(id) => {
                info!(project = project.title, "showing project details");
                self.modal = Some(Modal::Details(id));
            }
        }
        self.status_message = None;
        self.dirty = true;
        true
    }

    fn open_game(&mut self, kind: GameKind) {
        info!(game = kind.title(), "mounting game");
        self.modal = Some(Modal::Game(ActiveGame::new(kind, &mut self.rng)));
    }

    /// Close the modal, dropping whatever engine it held.
    pub fn close_modal(&mut self) {
        if let Some(modal) = self.modal.take() {
            info!(modal = modal.title(), "modal closed");
            self.dirty = true;
        }
    }

    #[cfg(test)]
    pub fn active_game_mut(&mut self) -> Option<&mut ActiveGame> {
        match self.modal.as_mut() {
            Some(Modal::Game(game)) => Some(game),
            _ => None,
        }
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        match &self.modal {
            Some(modal) => format!("{} | Esc to close", modal.title()),
            None => {
                let completed = PROJECTS
                    .iter()
                    .filter(|p| p.status == catalog::MissionStatus::Completed)
                    .count();
                format!("Missions: {}/{} complete", completed, PROJECTS.len())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        let mut config = AppConfig::default();
        config.games.seed = Some(3);
        AppState::new(config)
    }

    fn project_for(kind: GameKind) -> &'static Project {
        PROJECTS.iter().find(|p| p.game == Some(kind)).unwrap()
    }

    #[test]
    fn test_section_cycle() {
        assert_eq!(Section::Home.next(), Section::Projects);
        assert_eq!(Section::Goals.next(), Section::Home);
        assert_eq!(Section::Home.prev(), Section::Goals);
    }

    #[test]
    fn test_open_game_mounts_fresh_engine() {
        let mut state = state();
        assert!(state.open_project(project_for(GameKind::TicTacToe)));
        match &state.modal {
            Some(Modal::Game(game)) => assert_eq!(game.kind(), GameKind::TicTacToe),
            other => panic!("unexpected modal {:?}", other),
        }
    }

    #[test]
    fn test_open_ignored_while_modal_open() {
        let mut state = state();
        assert!(state.open_project(project_for(GameKind::Calculator)));
        assert!(!state.open_project(project_for(GameKind::NumberGuessing)));
        assert_eq!(state.modal.as_ref().map(Modal::title), Some("Calculator"));
    }

    #[test]
    fn test_details_and_locked() {
        let mut state = state();
        let website = catalog::find(4).unwrap();
        assert!(state.open_project(website));
        assert_eq!(state.modal, Some(Modal::Details(4)));
        state.close_modal();

        let locked = catalog::find(6).unwrap();
        assert!(!state.open_project(locked));
        assert!(state.modal.is_none());
        assert!(state.status_line().contains("locked"));
    }

    #[test]
    fn test_close_and_reopen_starts_over() {
        let mut state = state();
        state.open_project(project_for(GameKind::TicTacToe));
        if let Some(ActiveGame::TicTacToe { game, .. }) = state.active_game_mut() {
            game.place(0);
        }
        state.close_modal();
        assert!(state.modal.is_none());

        state.open_project(project_for(GameKind::TicTacToe));
        match state.active_game_mut() {
            Some(ActiveGame::TicTacToe { game, .. }) => assert!(game.cells().iter().all(Option::is_none)),
            other => panic!("unexpected game {:?}", other),
        }
    }

    #[test]
    fn test_catalog_selection_is_clamped() {
        let mut state = state();
        state.select_prev_project();
        assert_eq!(state.catalog.selected, 0);
        for _ in 0..20 {
            state.select_next_project();
        }
        assert_eq!(state.catalog.selected, PROJECTS.len() - 1);
    }

    #[test]
    fn test_status_line() {
        let mut state = state();
        assert_eq!(state.status_line(), "Missions: 4/6 complete");
        state.open_project(project_for(GameKind::Calculator));
        assert_eq!(state.status_line(), "Calculator | Esc to close");
    }
}
