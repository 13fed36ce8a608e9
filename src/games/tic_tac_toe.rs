//! Tic-tac-toe engine.
//!
//! Cells are indexed 0-8 in reading order. X always opens. A placement is
//! checked for a completed line before the board is checked for a draw, so a
//! final move that both fills the board and completes a line is a win.

use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won(Player),
    Draw,
}

/// Rows, columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub type Cell = Option<Player>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToe {
    cells: [Cell; 9],
    current_player: Player,
    status: Status,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe {
    pub fn new() -> Self {
        Self {
            cells: [None; 9],
            current_player: Player::X,
            status: Status::Playing,
        }
    }

    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != Status::Playing
    }

    /// Mark `index` for the player to move. Returns `false`, leaving the
    /// board untouched, if the index is off the board, the cell is taken, or
    /// the game has ended.
    pub fn place(&mut self, index: usize) -> bool {
        if self.is_over() {
            return false;
        }
        match self.cells.get(index) {
            Some(None) => {}
            _ => return false,
        }

        let player = self.current_player;
        self.cells[index] = Some(player);

        if find_line(&self.cells).is_some() {
            self.status = Status::Won(player);
            debug!(%player, index, "line completed");
        } else if self.cells.iter().all(Option::is_some) {
            self.status = Status::Draw;
            debug!(index, "board full, draw");
        } else {
            self.current_player = player.other();
        }
        true
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The completed line, if any, for highlighting.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        find_line(&self.cells)
    }

    pub fn status_message(&self) -> String {
        match self.status {
            Status::Playing => format!("Player {}'s turn", self.current_player),
            Status::Won(player) => format!("{} wins!", player),
            Status::Draw => "It's a draw!".to_string(),
        }
    }
}

fn find_line(cells: &[Cell; 9]) -> Option<[usize; 3]> {
    LINES.iter().copied().find(|&[a, b, c]| {
        cells[a].is_some() && cells[a] == cells[b] && cells[a] == cells[c]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const X: Cell = Some(Player::X);
    const O: Cell = Some(Player::O);

    fn play(moves: &[usize]) -> TicTacToe {
        let mut game = TicTacToe::new();
        for &m in moves {
            assert!(game.place(m), "move {} rejected", m);
        }
        game
    }

    #[test]
    fn test_new_game() {
        let game = TicTacToe::new();
        assert_eq!(game.cells(), &[None; 9]);
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.status(), Status::Playing);
        assert_eq!(game.status_message(), "Player X's turn");
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = TicTacToe::new();
        assert!(game.place(4));
        assert_eq!(game.current_player(), Player::O);
        assert!(game.place(0));
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.cells()[4], X);
        assert_eq!(game.cells()[0], O);
    }

    #[test]
    fn test_top_row_win() {
        let game = play(&[0, 3, 1, 4, 2]);
        assert_eq!(game.status(), Status::Won(Player::X));
        assert_eq!(game.cells(), &[X, X, X, O, O, None, None, None, None]);
        assert_eq!(game.winning_line(), Some([0, 1, 2]));
        assert_eq!(game.status_message(), "X wins!");
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn test_column_and_diagonal_wins() {
        let game = play(&[0, 1, 3, 2, 6]);
        assert_eq!(game.status(), Status::Won(Player::X));
        assert_eq!(game.winning_line(), Some([0, 3, 6]));

        let game = play(&[0, 2, 1, 4, 3, 6]);
        assert_eq!(game.status(), Status::Won(Player::O));
        assert_eq!(game.winning_line(), Some([2, 4, 6]));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X
        // X O O
        // O X X
        let game = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(game.status(), Status::Draw);
        assert_eq!(game.winning_line(), None);
        assert_eq!(game.status_message(), "It's a draw!");
    }

    #[test]
    fn test_last_move_completing_line_is_win_not_draw() {
        // X O X
        // O X O
        // O X X  <- final X at 8 fills the board and completes the diagonal
        let mut game = play(&[0, 1, 2, 3, 4, 5, 7, 6]);
        assert_eq!(game.status(), Status::Playing);
        assert!(game.place(8));
        assert!(game.cells().iter().all(Option::is_some));
        assert_eq!(game.status(), Status::Won(Player::X));
        assert_eq!(game.winning_line(), Some([0, 4, 8]));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut game = play(&[4]);
        let before = game.clone();
        assert!(!game.place(4));
        assert_eq!(game, before);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut game = TicTacToe::new();
        assert!(!game.place(9));
        assert_eq!(game, TicTacToe::new());
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut game = play(&[0, 3, 1, 4, 2]);
        let cells = *game.cells();
        assert!(!game.place(8));
        assert_eq!(game.cells(), &cells);
        assert_eq!(game.status(), Status::Won(Player::X));
    }

    #[test]
    fn test_reset() {
        let mut game = play(&[0, 3, 1, 4, 2]);
        game.reset();
        assert_eq!(game, TicTacToe::new());
    }

    proptest! {
        #[test]
        fn finished_games_never_change(moves in prop::collection::vec(0usize..12, 0..30)) {
            let mut game = TicTacToe::new();
            let mut finished: Option<(Status, [Cell; 9])> = None;
            for m in moves {
                let accepted = game.place(m);
                if let Some((status, cells)) = finished {
                    prop_assert!(!accepted);
                    prop_assert_eq!(game.status(), status);
                    prop_assert_eq!(game.cells(), &cells);
                } else if game.is_over() {
                    finished = Some((game.status(), *game.cells()));
                }
            }
        }

        #[test]
        fn marks_never_exceed_turn_order(moves in prop::collection::vec(0usize..9, 0..20)) {
            let mut game = TicTacToe::new();
            for m in moves {
                game.place(m);
                let xs = game.cells().iter().filter(|c| **c == X).count();
                let os = game.cells().iter().filter(|c| **c == O).count();
                prop_assert!(xs == os || xs == os + 1);
            }
        }
    }
}
