//! TUI effects boundary: event loop, terminal lifecycle, event mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal: all logic lives in the pure layers.
//!
//! Single-threaded: each crossterm event is mapped, reduced, and redrawn
//! before the next one is read.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use crate::game::Game;

use super::state::{App, AppEvent};
use super::update::update;
use super::view::render;

// ============================================================================
// EVENT MAPPING
// ============================================================================

/// Map a crossterm event to an app event.
///
/// Returns None for events the game has no use for (mouse, focus, paste,
/// key releases).
pub fn map_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Press => None,
        Event::Key(key) => {
            let ctrl_c =
                key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
            if ctrl_c || key.code == KeyCode::Esc {
                Some(AppEvent::Quit)
            } else {
                Some(AppEvent::Key(key))
            }
        }
        Event::Resize(width, height) => Some(AppEvent::Resize { width, height }),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Play one session in the terminal.
///
/// Sets up the terminal, runs the loop until the player quits, restores
/// the terminal, and hands back the final game state.
pub fn run(game: Game) -> io::Result<Game> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = crossterm::terminal::size()
        .and_then(|(width, height)| event_loop(&mut terminal, App::new(game, width, height)));

    restore_terminal()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> io::Result<Game> {
    info!(width = app.width, height = app.height, "session started");

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            break;
        }

        if let Some(event) = map_event(event::read()?) {
            app = update(app, event);
        }
    }

    info!(
        result = %app.game.result(),
        found = app.game.guesses().len(),
        attempts_left = app.game.attempts_left(),
        "session ended"
    );
    Ok(app.game)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState, MouseEvent, MouseEventKind};

    #[test]
    fn ctrl_c_maps_to_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_event(Event::Key(key)), Some(AppEvent::Quit));
    }

    #[test]
    fn esc_maps_to_quit() {
        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(map_event(Event::Key(key)), Some(AppEvent::Quit));
    }

    #[test]
    fn plain_c_is_a_key_press() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(map_event(Event::Key(key)), Some(AppEvent::Key(key)));
    }

    #[test]
    fn enter_is_forwarded_as_key() {
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(map_event(Event::Key(key)), Some(AppEvent::Key(key)));
    }

    #[test]
    fn key_release_is_ignored() {
        let key = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(map_event(Event::Key(key)), None);
    }

    #[test]
    fn resize_maps_to_resize() {
        assert_eq!(
            map_event(Event::Resize(80, 24)),
            Some(AppEvent::Resize { width: 80, height: 24 })
        );
    }

    #[test]
    fn mouse_and_focus_are_ignored() {
        let mouse = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(map_event(Event::Mouse(mouse)), None);
        assert_eq!(map_event(Event::FocusGained), None);
    }
}
