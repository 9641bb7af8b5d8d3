//! Domain types for word-connector.
//!
//! Plain data: the puzzle definition, guess outcomes, and output settings.
//! The engine that mutates game state lives in [`crate::game`].

use serde::Serialize;

// ============================================================================
// PUZZLE DEFINITION
// ============================================================================

/// Answers shipped with the game, in canonical order.
pub const DEFAULT_ANSWERS: [&str; 4] = ["tea", "eat", "ate", "at"];

/// Letters shown to the player. Informational only.
pub const DEFAULT_OPTIONS: [char; 3] = ['a', 'e', 't'];

/// Wrong guesses allowed before the game is lost.
pub const DEFAULT_ATTEMPTS: u32 = 5;

/// Fixed configuration a game is built from.
///
/// Order of `answers` defines the canonical index reported by
/// [`Outcome::Correct`] and stored in the guess record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// Target words.
    pub answers: Vec<String>,
    /// Letters displayed as available. Not enforced against guesses.
    pub options: Vec<char>,
    /// Starting attempts budget.
    pub attempts: u32,
}

impl Default for Puzzle {
    fn default() -> Self {
        Self {
            answers: DEFAULT_ANSWERS.iter().map(|w| w.to_string()).collect(),
            options: DEFAULT_OPTIONS.to_vec(),
            attempts: DEFAULT_ATTEMPTS,
        }
    }
}

/// A puzzle that cannot produce a playable game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// The answer set is empty.
    NoAnswers,

    /// The same word is listed twice; the second copy could never be credited.
    DuplicateAnswer { word: String },
}

impl std::fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PuzzleError::NoAnswers => write!(f, "Puzzle has no answers"),
            PuzzleError::DuplicateAnswer { word } => {
                write!(f, "Answer listed more than once: {}", word)
            }
        }
    }
}

impl std::error::Error for PuzzleError {}

// ============================================================================
// GUESS OUTCOMES
// ============================================================================

/// Result of submitting one candidate word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing was typed. No state change.
    Empty,
    /// The word was already found. No state change.
    AlreadyGuessed,
    /// New answer found at this index into the answer set.
    Correct(usize),
    /// Not an answer. Costs one attempt (never below zero).
    Incorrect,
}

/// How a finished (or abandoned) session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Won,
    Lost,
    /// The player left before the game was decided.
    Quit,
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Won => write!(f, "won"),
            GameResult::Lost => write!(f, "lost"),
            GameResult::Quit => write!(f, "quit"),
        }
    }
}

// ============================================================================
// SUMMARY
// ============================================================================

/// End-of-session snapshot printed after the TUI exits.
///
/// Unfound answers are never included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub result: GameResult,
    /// Found words, in discovery order.
    pub found: Vec<String>,
    /// Answers still hidden.
    pub remaining: usize,
    pub attempts_left: u32,
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for the end-of-session summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// TESTS
// ============================================================================
