//! Game engine: guess validation, attempt accounting, win/loss.
//!
//! Pure state, no I/O. A [`Game`] is built once from a [`Puzzle`] and only
//! ever changes through [`Game::submit_guess`].

use std::collections::HashSet;

use crate::types::{GameResult, Outcome, Puzzle, PuzzleError};

/// Puzzle state for one session.
///
/// Invariants:
/// - every index in `guesses` is a valid index into `answers`
/// - `guesses` holds no duplicates, so its length never exceeds `answers`
/// - `attempts_left` only decreases, and never below zero
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    answers: Vec<String>,
    options: Vec<char>,
    /// Indices into `answers`, in discovery order.
    guesses: Vec<usize>,
    attempts_left: u32,
}

impl Game {
    /// Build a game from a puzzle definition.
    pub fn new(puzzle: Puzzle) -> Result<Self, PuzzleError> {
        if puzzle.answers.is_empty() {
            return Err(PuzzleError::NoAnswers);
        }

        let mut seen = HashSet::new();
        for word in &puzzle.answers {
            if !seen.insert(word.as_str()) {
                return Err(PuzzleError::DuplicateAnswer { word: word.clone() });
            }
        }

        Ok(Self {
            answers: puzzle.answers,
            options: puzzle.options,
            guesses: Vec::new(),
            attempts_left: puzzle.attempts,
        })
    }

    /// Submit a candidate word.
    ///
    /// Matching is exact and case-sensitive. Only an `Incorrect` outcome
    /// costs an attempt; resubmitting a found word is free.
    pub fn submit_guess(&mut self, candidate: &str) -> Outcome {
        if candidate.is_empty() {
            return Outcome::Empty;
        }

        if self.is_already_guessed(candidate) {
            return Outcome::AlreadyGuessed;
        }

        match self.answers.iter().position(|answer| answer == candidate) {
            Some(index) => {
                self.guesses.push(index);
                Outcome::Correct(index)
            }
            None => {
                self.attempts_left = self.attempts_left.saturating_sub(1);
                Outcome::Incorrect
            }
        }
    }

    fn is_already_guessed(&self, candidate: &str) -> bool {
        self.guesses
            .iter()
            .any(|&index| self.answers[index] == candidate)
    }

    /// Every answer has been found.
    pub fn is_won(&self) -> bool {
        self.guesses.len() == self.answers.len()
    }

    /// Out of attempts with answers still missing. Never true once won.
    pub fn is_lost(&self) -> bool {
        self.attempts_left == 0 && !self.is_won()
    }

    /// `is_won() || is_lost()`.
    pub fn is_over(&self) -> bool {
        self.is_won() || self.is_lost()
    }

    pub fn remaining_word_count(&self) -> usize {
        self.answers.len() - self.guesses.len()
    }

    pub fn attempts_left(&self) -> u32 {
        self.attempts_left
    }

    pub fn options(&self) -> &[char] {
        &self.options
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Guess record: answer indices in discovery order.
    pub fn guesses(&self) -> &[usize] {
        &self.guesses
    }

    /// Found words, in discovery order.
    pub fn found_words(&self) -> impl Iterator<Item = &str> {
        self.guesses.iter().map(|&index| self.answers[index].as_str())
    }

    /// Classification of the current state. Won takes precedence over lost.
    pub fn result(&self) -> GameResult {
        if self.is_won() {
            GameResult::Won
        } else if self.is_lost() {
            GameResult::Lost
        } else {
            GameResult::Quit
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
