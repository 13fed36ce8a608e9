//! The three mini-game engines and the tagged union the modal host mounts.
//!
//! Engines are plain owned values with no knowledge of rendering. Each modal
//! open builds a fresh [`ActiveGame`], and closing the modal drops it.

pub mod calculator;
pub mod number_guessing;
pub mod tic_tac_toe;

use calculator::Calculator;
use number_guessing::NumberGuessing;
use rand::RngExt;
use tic_tac_toe::TicTacToe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    Calculator,
    TicTacToe,
    NumberGuessing,
}

impl GameKind {
    pub fn title(self) -> &'static str {
        match self {
            GameKind::Calculator => "Calculator",
            GameKind::TicTacToe => "Tic-Tac-Toe",
            GameKind::NumberGuessing => "Number Guessing Game",
        }
    }
}

/// A mounted engine plus the bits of view state its modal needs.
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveGame {
    Calculator(Calculator),
    TicTacToe {
        game: TicTacToe,
        /// Highlighted cell for arrow-key play.
        cursor: usize,
    },
    NumberGuessing {
        game: NumberGuessing,
        /// Text typed into the guess field.
        input: String,
    },
}

impl ActiveGame {
    pub fn new<R: RngExt + ?Sized>(kind: GameKind, rng: &mut R) -> Self {
        match kind {
            GameKind::Calculator => ActiveGame::Calculator(Calculator::new()),
            GameKind::TicTacToe => ActiveGame::TicTacToe {
                game: TicTacToe::new(),
                cursor: 4,
            },
            GameKind::NumberGuessing => ActiveGame::NumberGuessing {
                game: NumberGuessing::new(rng),
                input: String::new(),
            },
        }
    }

    pub fn kind(&self) -> GameKind {
        match self {
            ActiveGame::Calculator(_) => GameKind::Calculator,
            ActiveGame::TicTacToe { .. } => GameKind::TicTacToe,
            ActiveGame::NumberGuessing { .. } => GameKind::NumberGuessing,
        }
    }

    /// Whether the mounted game has reached a terminal state. The calculator
    /// never does.
    pub fn is_over(&self) -> bool {
        match self {
            ActiveGame::Calculator(_) => false,
            ActiveGame::TicTacToe { game, .. } => game.is_over(),
            ActiveGame::NumberGuessing { game, .. } => game.is_over(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_game_matches_kind() {
        let mut rng = StdRng::seed_from_u64(1);
        for kind in [GameKind::Calculator, GameKind::TicTacToe, GameKind::NumberGuessing] {
            let game = ActiveGame::new(kind, &mut rng);
            assert_eq!(game.kind(), kind);
            assert!(!game.is_over());
        }
    }

    #[test]
    fn test_fresh_instances_start_clean() {
        let mut rng = StdRng::seed_from_u64(1);
        match ActiveGame::new(GameKind::TicTacToe, &mut rng) {
            ActiveGame::TicTacToe { game, cursor } => {
                assert_eq!(game, TicTacToe::new());
                assert_eq!(cursor, 4);
            }
            other => panic!("unexpected game {:?}", other),
        }
        match ActiveGame::new(GameKind::NumberGuessing, &mut rng) {
            ActiveGame::NumberGuessing { game, input } => {
                assert_eq!(game.attempts(), 0);
                assert!(input.is_empty());
            }
            other => panic!("unexpected game {:?}", other),
        }
    }
}
