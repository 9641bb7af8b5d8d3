//! Pure state transitions: (App, AppEvent) → App.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! No event fails; events with nothing to do return the app unchanged.

use crossterm::event::KeyCode;
use tracing::debug;

use crate::types::Outcome;

use super::state::{App, AppEvent};
use super::status::format_status;

/// Pure state transition function.
///
/// Consumes the current app and returns the next one. Once `should_quit`
/// is set, every later event is ignored.
pub fn update(mut app: App, event: AppEvent) -> App {
    if app.should_quit {
        return app;
    }

    match event {
        AppEvent::Quit => {
            app.should_quit = true;
            app
        }
        AppEvent::Resize { width, height } => {
            debug!(width, height, "terminal resized");
            app.width = width;
            app.height = height;
            app
        }
        AppEvent::Key(key) if key.code == KeyCode::Enter => submit(app),
        AppEvent::Key(key) => {
            app.input.handle_key(key);
            app
        }
    }
}

/// Enter: take the typed word, clear the input, score the guess.
fn submit(mut app: App) -> App {
    let candidate = app.input.value();
    app.input.reset();

    if candidate.is_empty() {
        return app;
    }

    let outcome = app.game.submit_guess(&candidate);
    debug!(
        guess = %candidate,
        ?outcome,
        remaining = app.game.remaining_word_count(),
        attempts_left = app.game.attempts_left(),
        "guess submitted"
    );

    if outcome != Outcome::Empty {
        app.status = format_status(&app.game);
    }
    app
}

// ============================================================================
// TESTS
// ============================================================================
