//! TUI state algebra: pure types, zero effects.
//!
//! [`App`] is the view state. It owns the game as a named field rather
//! than flattening puzzle data into the screen, so the engine stays
//! usable (and testable) on its own. [`AppEvent`] is everything the
//! reducer can be asked to handle.

use crossterm::event::KeyEvent;
use ratatui::text::Text;

use crate::game::Game;

use super::input::TextInput;
use super::status::format_status;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop delivers to the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// A key press. Enter submits; anything else goes to the input widget.
    Key(KeyEvent),
    /// The terminal changed size (cells).
    Resize { width: u16, height: u16 },
    /// End the session.
    Quit,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug, Clone, PartialEq)]
pub struct App {
    /// Puzzle state. Only changed by guess submission.
    pub game: Game,

    /// Text entry for the next guess.
    pub input: TextInput,

    /// Cached status line, derived from `game`.
    pub status: Text<'static>,

    /// Last known terminal width.
    pub width: u16,

    /// Last known terminal height.
    pub height: u16,

    /// Set once a quit event arrives; the loop exits after the next draw.
    pub should_quit: bool,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Start a session on a fresh game at the given terminal size.
    pub fn new(game: Game, width: u16, height: u16) -> Self {
        let status = format_status(&game);
        App {
            game,
            input: TextInput::new(),
            status,
            width,
            height,
            should_quit: false,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
