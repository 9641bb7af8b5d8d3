//! TUI color semantics and style descriptors.
//!
//! Styles are built on demand by small pure functions rather than held in
//! shared constants, so callers can layer them (`status_segment` builds on
//! `status_bar`) without any hidden global state.
//!
//! Color semantics:
//! - Green: found answers, win message
//! - Red: loss message
//! - Pink / purple: progress counters in the status bar
//! - Violet background: credit label

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// PALETTE
// ============================================================================

pub const LIGHT_GREEN: Color = Color::Rgb(0x04, 0xB5, 0x75);
pub const LOSS_RED: Color = Color::Rgb(0xDC, 0x35, 0x35);
pub const PROGRESS_PINK: Color = Color::Rgb(0xFF, 0x5F, 0x87);
pub const ATTEMPTS_PURPLE: Color = Color::Rgb(0xA5, 0x50, 0xDF);
pub const CREAM: Color = Color::Rgb(0xFF, 0xFD, 0xF5);
pub const CREDIT_VIOLET: Color = Color::Rgb(0x61, 0x24, 0xDF);
pub const BAR_FOREGROUND: Color = Color::Rgb(0xC1, 0xC6, 0xB2);
pub const BAR_BACKGROUND: Color = Color::Rgb(0x35, 0x35, 0x33);

// ============================================================================
// ANSWERS AND OPTIONS
// ============================================================================

/// A word the player has found.
pub fn correct_answer() -> Style {
    Style::new().fg(LIGHT_GREEN).add_modifier(Modifier::BOLD)
}

/// Frame around each option letter.
pub fn option_border() -> Style {
    Style::new()
}

/// Frame around the two main panels.
pub fn panel_border() -> Style {
    Style::new()
}

// ============================================================================
// STATUS BAR
// ============================================================================

/// Background strip the status segments sit on.
pub fn status_bar() -> Style {
    Style::new().fg(BAR_FOREGROUND).bg(BAR_BACKGROUND)
}

/// One status segment: bar background, own foreground.
pub fn status_segment(fg: Color) -> Style {
    status_bar().fg(fg)
}

pub fn credit() -> Style {
    Style::new().fg(CREAM).bg(CREDIT_VIOLET)
}

/// Win or loss banner.
pub fn end_message(fg: Color) -> Style {
    Style::new().fg(fg).add_modifier(Modifier::BOLD)
}

// ============================================================================
// INPUT
// ============================================================================

/// The cell under the input cursor.
pub fn cursor() -> Style {
    Style::new().add_modifier(Modifier::REVERSED)
}

// ============================================================================
// TESTS
// ============================================================================
