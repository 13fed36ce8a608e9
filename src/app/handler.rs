use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::games::calculator::{Calculator, Operator};
use crate::games::number_guessing::{self, NumberGuessing};
use crate::games::tic_tac_toe::{self, TicTacToe};
use crate::games::ActiveGame;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::rngs::StdRng;
use tracing::{debug, info};

/// Ticks between hero badge rotations.
pub const HERO_ROTATE_TICKS: u64 = 8;

/// Longest guess the input field accepts ("100").
const MAX_GUESS_DIGITS: usize = 3;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    state.tick_count = state.tick_count.wrapping_add(1);
    if state.section == Section::Home
        && state.modal.is_none()
        && state.tick_count % HERO_ROTATE_TICKS == 0
    {
        state.dirty = true;
    }
    vec![]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // The modal captures all input while open
    if state.modal.is_some() {
        return handle_modal_key(state, key);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return vec![Action::Quit],
        KeyCode::Tab => {
            state.set_section(state.section.next());
            return vec![];
        }
        KeyCode::BackTab => {
            state.set_section(state.section.prev());
            return vec![];
        }
        KeyCode::Char(c @ '1'..='3') => {
            let idx = (c as u8 - b'1') as usize;
            state.set_section(Section::ALL[idx]);
            return vec![];
        }
        _ => {}
    }

    match state.section {
        Section::Home => {
            // The hero's call to action jumps to the catalog
            if key.code == KeyCode::Enter {
                state.set_section(Section::Projects);
            }
            vec![]
        }
        Section::Projects => handle_catalog_key(state, key),
        Section::Goals => vec![],
    }
}

fn handle_catalog_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.select_prev_project(),
        KeyCode::Down | KeyCode::Char('j') => state.select_next_project(),
        KeyCode::Home => state.catalog.selected = 0,
        KeyCode::End => state.catalog.selected = crate::catalog::PROJECTS.len() - 1,
        KeyCode::Enter | KeyCode::Char(' ') => {
            state.open_selected_project();
        }
        _ => {}
    }
    vec![]
}

fn handle_modal_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.code == KeyCode::Esc {
        state.close_modal();
        return vec![];
    }

    if matches!(state.modal, Some(Modal::Details(_))) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char('q')) {
            state.close_modal();
        }
        return vec![];
    }

    let AppState {
        modal, rng, config, ..
    } = state;
    let Some(Modal::Game(active)) = modal else {
        return vec![];
    };

    let was_over = active.is_over();
    match &mut *active {
        ActiveGame::Calculator(calc) => handle_calculator_key(calc, key),
        ActiveGame::TicTacToe { game, cursor } => handle_tic_tac_toe_key(game, cursor, key),
        ActiveGame::NumberGuessing { game, input } => {
            handle_number_guessing_key(game, input, rng, key)
        }
    }

    if !was_over && active.is_over() {
        let won = is_win(active);
        info!(game = active.kind().title(), won, "game finished");
        if won && config.ui.bell_on_win {
            return vec![Action::Bell];
        }
    }
    vec![]
}

fn is_win(game: &ActiveGame) -> bool {
    match game {
        ActiveGame::Calculator(_) => false,
        ActiveGame::TicTacToe { game, .. } => {
            matches!(game.status(), tic_tac_toe::Status::Won(_))
        }
        ActiveGame::NumberGuessing { game, .. } => {
            game.status() == number_guessing::Status::Won
        }
    }
}

fn handle_calculator_key(calc: &mut Calculator, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c @ '0'..='9') => calc.input_digit(c as u8 - b'0'),
        KeyCode::Char('.') | KeyCode::Char(',') => calc.input_decimal_point(),
        KeyCode::Char('=') | KeyCode::Enter => calc.evaluate(),
        KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Delete => calc.clear(),
        KeyCode::Char(c) => {
            if let Some(op) = Operator::from_key(c) {
                calc.set_operator(op);
            }
        }
        _ => {}
    }
}

fn handle_tic_tac_toe_key(game: &mut TicTacToe, cursor: &mut usize, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c @ '1'..='9') => {
            *cursor = (c as u8 - b'1') as usize;
            if !game.place(*cursor) {
                debug!(cell = *cursor, "placement rejected");
            }
        }
        KeyCode::Left if *cursor % 3 > 0 => *cursor -= 1,
        KeyCode::Right if *cursor % 3 < 2 => *cursor += 1,
        KeyCode::Up if *cursor >= 3 => *cursor -= 3,
        KeyCode::Down if *cursor < 6 => *cursor += 3,
        KeyCode::Enter | KeyCode::Char(' ') => {
            if game.is_over() {
                game.reset();
            } else if !game.place(*cursor) {
                debug!(cell = *cursor, "placement rejected");
            }
        }
        KeyCode::Char('r') | KeyCode::Char('R') => game.reset(),
        _ => {}
    }
}

fn handle_number_guessing_key(
    game: &mut NumberGuessing,
    input: &mut String,
    rng: &mut StdRng,
    key: KeyEvent,
) {
    if game.is_over() {
        if matches!(
            key.code,
            KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char('r')
        ) {
            game.new_game(rng);
            input.clear();
        }
        return;
    }

    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() && input.len() < MAX_GUESS_DIGITS => input.push(c),
        KeyCode::Backspace => {
            input.pop();
        }
        KeyCode::Enter => {
            if game.guess_input(input).is_some() {
                input.clear();
            }
        }
        _ => {}
    }
}
