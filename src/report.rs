//! End-of-session summary.
//!
//! Pure functions: (Game, OutputFormat) → String.
//! No I/O. Printed by the binary after the TUI exits.

use crate::game::Game;
use crate::types::{OutputFormat, SessionSummary};

/// Snapshot the parts of a game that are safe to show after play.
pub fn summarize(game: &Game) -> SessionSummary {
    SessionSummary {
        result: game.result(),
        found: game.found_words().map(str::to_string).collect(),
        remaining: game.remaining_word_count(),
        attempts_left: game.attempts_left(),
    }
}

/// Format a game summary for output.
pub fn format_summary(game: &Game, format: OutputFormat) -> Result<String, serde_json::Error> {
    let summary = summarize(game);
    match format {
        OutputFormat::Human => Ok(format_human(&summary)),
        OutputFormat::Json => format_json(&summary),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(summary: &SessionSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!("Result:        {}\n", summary.result));

    if summary.found.is_empty() {
        out.push_str("Found:         (none)\n");
    } else {
        out.push_str(&format!("Found:         {}\n", summary.found.join(", ")));
    }

    out.push_str(&format!("Words to go:   {}\n", summary.remaining));
    out.push_str(&format!("Attempts left: {}\n", summary.attempts_left));

    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(summary: &SessionSummary) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(summary)?;
    out.push('\n');
    Ok(out)
}

// ============================================================================
// TESTS
// ============================================================================
