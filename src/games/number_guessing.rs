//! Number-guessing engine.
//!
//! A secret in `1..=100` is drawn from a caller-supplied RNG so games can be
//! replayed from a seed. The player has [`MAX_ATTEMPTS`] guesses; invalid
//! guesses are reported but never cost an attempt.

use rand::RngExt;
use thiserror::Error;
use tracing::debug;

pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 100;
pub const MAX_ATTEMPTS: u8 = 7;

const WELCOME_MESSAGE: &str = "Guess a number between 1 and 100!";
const INVALID_MESSAGE: &str = "Please enter a valid number between 1 and 100!";

/// Why typed guess text could not be turned into a guess.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuessError {
    #[error("no guess entered")]
    Empty,
    #[error("'{0}' is not a whole number")]
    NotANumber(String),
    #[error("{0} is outside 1..=100")]
    OutOfRange(i64),
}

/// Parse the text typed into the guess field.
pub fn parse_guess(input: &str) -> Result<u8, GuessError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(GuessError::Empty);
    }
    let value: i64 = trimmed
        .parse()
        .map_err(|_| GuessError::NotANumber(trimmed.to_string()))?;
    in_range(value).ok_or(GuessError::OutOfRange(value))
}

fn in_range(value: i64) -> Option<u8> {
    u8::try_from(value)
        .ok()
        .filter(|v| (MIN_NUMBER..=MAX_NUMBER).contains(v))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

/// What a guess did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Not a number in range; no attempt consumed.
    Invalid,
    /// The secret is lower than the guess.
    TooHigh,
    /// The secret is higher than the guess.
    TooLow,
    Correct,
    /// Wrong, and that was the last attempt.
    OutOfAttempts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberGuessing {
    secret: u8,
    attempts: u8,
    status: Status,
    last_message: String,
}

impl NumberGuessing {
    pub fn new<R: RngExt + ?Sized>(rng: &mut R) -> Self {
        let mut game = Self {
            secret: MIN_NUMBER,
            attempts: 0,
            status: Status::Playing,
            last_message: String::new(),
        };
        game.new_game(rng);
        game
    }

    /// Start over with a freshly drawn secret.
    pub fn new_game<R: RngExt + ?Sized>(&mut self, rng: &mut R) {
        self.secret = rng.random_range(MIN_NUMBER..=MAX_NUMBER);
        self.attempts = 0;
        self.status = Status::Playing;
        self.last_message = WELCOME_MESSAGE.to_string();
        debug!("new number-guessing game");
    }

    pub fn attempts(&self) -> u8 {
        self.attempts
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn last_message(&self) -> &str {
        &self.last_message
    }

    pub fn is_over(&self) -> bool {
        self.status != Status::Playing
    }

    /// The secret, once it no longer matters.
    pub fn revealed_secret(&self) -> Option<u8> {
        self.is_over().then_some(self.secret)
    }

    /// Closing line shown under the result once the game ends.
    pub fn closing_note(&self) -> Option<&'static str> {
        match self.status {
            Status::Playing => None,
            Status::Won => Some("You're a real programmer!"),
            Status::Lost => Some("Don't give up! Programmers learn from their mistakes!"),
        }
    }

    /// Submit a guess. Returns `None` when the game is already over.
    pub fn guess(&mut self, value: i64) -> Option<GuessOutcome> {
        if self.is_over() {
            return None;
        }
        let Some(value) = in_range(value) else {
            self.last_message = INVALID_MESSAGE.to_string();
            return Some(GuessOutcome::Invalid);
        };

        self.attempts += 1;
        let outcome = if value == self.secret {
            self.status = Status::Won;
            let plural = if self.attempts > 1 { "s" } else { "" };
            self.last_message = format!(
                "Congratulations! You got it in {} attempt{}!",
                self.attempts, plural
            );
            GuessOutcome::Correct
        } else if self.attempts == MAX_ATTEMPTS {
            self.status = Status::Lost;
            self.last_message = format!("Game over! The number was {}. Try again!", self.secret);
            GuessOutcome::OutOfAttempts
        } else {
            let (hint, outcome) = if value > self.secret {
                ("lower", GuessOutcome::TooHigh)
            } else {
                ("higher", GuessOutcome::TooLow)
            };
            self.last_message = format!(
                "Wrong! The number is {} than {}. Attempt {}/{}",
                hint, value, self.attempts, MAX_ATTEMPTS
            );
            outcome
        };
        debug!(value, attempts = self.attempts, ?outcome, "guess");
        Some(outcome)
    }

    /// Submit the text typed in the guess field. Blank input is ignored;
    /// anything else that is not a whole number in range counts as an
    /// invalid guess.
    pub fn guess_input(&mut self, input: &str) -> Option<GuessOutcome> {
        if self.is_over() {
            return None;
        }
        match parse_guess(input) {
            Ok(value) => self.guess(i64::from(value)),
            Err(GuessError::Empty) => None,
            Err(err) => {
                debug!(%err, "rejected guess input");
                self.last_message = INVALID_MESSAGE.to_string();
                Some(GuessOutcome::Invalid)
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn with_secret(secret: u8) -> Self {
        Self {
            secret,
            attempts: 0,
            status: Status::Playing,
            last_message: WELCOME_MESSAGE.to_string(),
        }
    }

    #[cfg(test)]
    pub(crate) fn secret(&self) -> u8 {
        self.secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn wrong_guess(secret: u8) -> i64 {
        if secret == MAX_NUMBER {
            1
        } else {
            i64::from(secret) + 1
        }
    }

    #[test]
    fn test_secret_in_range_for_many_seeds() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let game = NumberGuessing::new(&mut rng);
            assert!((MIN_NUMBER..=MAX_NUMBER).contains(&game.secret()));
            assert_eq!(game.attempts(), 0);
            assert_eq!(game.status(), Status::Playing);
            assert_eq!(game.last_message(), WELCOME_MESSAGE);
        }
    }

    #[test]
    fn test_same_seed_same_secret() {
        let a = NumberGuessing::new(&mut StdRng::seed_from_u64(7));
        let b = NumberGuessing::new(&mut StdRng::seed_from_u64(7));
        assert_eq!(a.secret(), b.secret());
    }

    #[test]
    fn test_correct_guess_wins_at_any_attempt() {
        for prior in 0..MAX_ATTEMPTS {
            let mut game = NumberGuessing::with_secret(42);
            for _ in 0..prior {
                game.guess(wrong_guess(42));
            }
            assert_eq!(game.guess(42), Some(GuessOutcome::Correct));
            assert_eq!(game.status(), Status::Won);
            assert_eq!(game.attempts(), prior + 1);
        }
    }

    #[test]
    fn test_win_message_plural() {
        let mut game = NumberGuessing::with_secret(10);
        game.guess(10);
        assert_eq!(game.last_message(), "Congratulations! You got it in 1 attempt!");

        let mut game = NumberGuessing::with_secret(10);
        game.guess(11);
        game.guess(10);
        assert_eq!(game.last_message(), "Congratulations! You got it in 2 attempts!");
    }

    #[test]
    fn test_hints() {
        let mut game = NumberGuessing::with_secret(50);
        assert_eq!(game.guess(70), Some(GuessOutcome::TooHigh));
        assert_eq!(game.last_message(), "Wrong! The number is lower than 70. Attempt 1/7");
        assert_eq!(game.guess(20), Some(GuessOutcome::TooLow));
        assert_eq!(game.last_message(), "Wrong! The number is higher than 20. Attempt 2/7");
        assert_eq!(game.status(), Status::Playing);
    }

    #[test]
    fn test_seven_wrong_guesses_lose() {
        let mut game = NumberGuessing::with_secret(33);
        for i in 1..MAX_ATTEMPTS {
            assert_eq!(game.guess(34), Some(GuessOutcome::TooHigh));
            assert_eq!(game.attempts(), i);
        }
        assert_eq!(game.guess(1), Some(GuessOutcome::OutOfAttempts));
        assert_eq!(game.status(), Status::Lost);
        assert_eq!(game.attempts(), MAX_ATTEMPTS);
        assert_eq!(game.last_message(), "Game over! The number was 33. Try again!");
        assert_eq!(game.revealed_secret(), Some(33));
    }

    #[test]
    fn test_out_of_range_does_not_consume_attempt() {
        let mut game = NumberGuessing::with_secret(5);
        assert_eq!(game.guess(0), Some(GuessOutcome::Invalid));
        assert_eq!(game.guess(101), Some(GuessOutcome::Invalid));
        assert_eq!(game.guess(-3), Some(GuessOutcome::Invalid));
        assert_eq!(game.attempts(), 0);
        assert_eq!(game.last_message(), INVALID_MESSAGE);
        assert_eq!(game.status(), Status::Playing);
    }

    #[test]
    fn test_guesses_after_end_are_ignored() {
        let mut game = NumberGuessing::with_secret(5);
        game.guess(5);
        let snapshot = game.clone();
        assert_eq!(game.guess(5), None);
        assert_eq!(game.guess(500), None);
        assert_eq!(game.guess_input("12"), None);
        assert_eq!(game, snapshot);
    }

    #[test]
    fn test_new_game_resets() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut game = NumberGuessing::with_secret(5);
        for _ in 0..MAX_ATTEMPTS {
            game.guess(6);
        }
        assert_eq!(game.status(), Status::Lost);
        game.new_game(&mut rng);
        assert_eq!(game.attempts(), 0);
        assert_eq!(game.status(), Status::Playing);
        assert_eq!(game.revealed_secret(), None);
        assert_eq!(game.closing_note(), None);
    }

    #[test]
    fn test_closing_notes() {
        let mut won = NumberGuessing::with_secret(5);
        won.guess(5);
        assert_eq!(won.closing_note(), Some("You're a real programmer!"));

        let mut lost = NumberGuessing::with_secret(5);
        for _ in 0..MAX_ATTEMPTS {
            lost.guess(9);
        }
        assert!(lost.closing_note().unwrap().starts_with("Don't give up"));
    }

    #[test]
    fn test_parse_guess() {
        assert_eq!(parse_guess(" 42 "), Ok(42));
        assert_eq!(parse_guess("100"), Ok(100));
        assert_eq!(parse_guess(""), Err(GuessError::Empty));
        assert_eq!(parse_guess("   "), Err(GuessError::Empty));
        assert_eq!(parse_guess("abc"), Err(GuessError::NotANumber("abc".into())));
        assert_eq!(parse_guess("42abc"), Err(GuessError::NotANumber("42abc".into())));
        assert_eq!(parse_guess("3.5"), Err(GuessError::NotANumber("3.5".into())));
        assert_eq!(parse_guess("0"), Err(GuessError::OutOfRange(0)));
        assert_eq!(parse_guess("101"), Err(GuessError::OutOfRange(101)));
    }

    #[test]
    fn test_guess_input() {
        let mut game = NumberGuessing::with_secret(64);
        assert_eq!(game.guess_input(""), None);
        assert_eq!(game.last_message(), WELCOME_MESSAGE);
        assert_eq!(game.guess_input("nope"), Some(GuessOutcome::Invalid));
        assert_eq!(game.attempts(), 0);
        assert_eq!(game.guess_input("64"), Some(GuessOutcome::Correct));
    }

    #[test]
    fn test_guess_error_messages() {
        assert_eq!(GuessError::OutOfRange(0).to_string(), "0 is outside 1..=100");
        assert_eq!(GuessError::NotANumber("x".into()).to_string(), "'x' is not a whole number");
    }
}
