mod calculator_view;
mod details_view;
mod goals;
mod hero;
mod layout;
mod modal;
mod nav_bar;
mod number_guessing_view;
mod project_list;
mod status_bar;
mod theme;
mod tic_tac_toe_view;

use crate::app::state::{AppState, Section};
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    nav_bar::render(frame, app_layout.nav_bar, state);
    match state.section {
        Section::Home => hero::render(frame, app_layout.content, state),
        Section::Projects => project_list::render(frame, app_layout.content, state),
        Section::Goals => goals::render(frame, app_layout.content),
    }
    status_bar::render(frame, app_layout.status_bar, state);

    // Modal is drawn last so it sits on top
    modal::render(frame, state);
}
