//! Status line: a styled summary of where the game stands.
//!
//! Pure function of [`Game`]. The result is cached on the app and only
//! recomputed after a guess changes the game.

use ratatui::text::{Line, Span, Text};

use crate::game::Game;

use super::theme;

pub const LOSS_MESSAGE: &str = "You've lost the game :(";
pub const WIN_MESSAGE: &str = ":) You've won the game 🎉";
pub const SEPARATOR: &str = "•";

/// Loss, then win, then progress counters.
pub fn format_status(game: &Game) -> Text<'static> {
    if game.is_lost() {
        Text::from(Span::styled(LOSS_MESSAGE, theme::end_message(theme::LOSS_RED)))
    } else if game.is_won() {
        Text::from(Span::styled(WIN_MESSAGE, theme::end_message(theme::LIGHT_GREEN)))
    } else {
        let progress = status_message(game.remaining_word_count(), "words to go");
        let attempts = status_message(game.attempts_left() as usize, "attempts left");

        Text::from(Line::from(vec![
            Span::raw(" "),
            segment(&progress, theme::PROGRESS_PINK),
            segment(SEPARATOR, theme::CREAM),
            segment(&attempts, theme::ATTEMPTS_PURPLE),
        ]))
    }
}

fn status_message(count: usize, label: &str) -> String {
    format!("{} {}", count, label)
}

/// One padded segment on the status bar background.
fn segment(text: &str, fg: ratatui::style::Color) -> Span<'static> {
    Span::styled(format!(" {} ", text), theme::status_segment(fg))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::compose::plain_text;
    use crate::types::Puzzle;

    fn new_game() -> Game {
        Game::new(Puzzle::default()).unwrap()
    }

    #[test]
    fn fresh_game_shows_counters() {
        let text = plain_text(&format_status(&new_game()));
        assert!(text.contains("4 words to go"));
        assert!(text.contains("5 attempts left"));
        assert!(text.contains(SEPARATOR));
    }

    #[test]
    fn counters_follow_guesses() {
        let mut game = new_game();
        game.submit_guess("tea");
        let text = plain_text(&format_status(&game));
        assert_eq!(text, "  3 words to go  •  5 attempts left ");

        game.submit_guess("xyz");
        let text = plain_text(&format_status(&game));
        assert!(text.contains("4 attempts left"));
    }

    #[test]
    fn segments_are_styled_independently() {
        let text = format_status(&new_game());
        let spans = &text.lines[0].spans;
        assert_eq!(spans[1].style.fg, Some(theme::PROGRESS_PINK));
        assert_eq!(spans[2].style.fg, Some(theme::CREAM));
        assert_eq!(spans[3].style.fg, Some(theme::ATTEMPTS_PURPLE));
    }

    #[test]
    fn loss_message_when_out_of_attempts() {
        let mut game = new_game();
        game.submit_guess("tea");
        for word in ["a", "b", "c", "d", "e"] {
            game.submit_guess(word);
        }
        let status = format_status(&game);
        assert_eq!(plain_text(&status), LOSS_MESSAGE);
        assert_eq!(status.lines[0].spans[0].style.fg, Some(theme::LOSS_RED));
    }

    #[test]
    fn win_message_when_all_found() {
        let mut game = new_game();
        for word in ["tea", "eat", "ate", "at"] {
            game.submit_guess(word);
        }
        let status = format_status(&game);
        assert_eq!(plain_text(&status), WIN_MESSAGE);
        assert_eq!(status.lines[0].spans[0].style.fg, Some(theme::LIGHT_GREEN));
    }

    #[test]
    fn win_beats_loss_when_both_could_apply() {
        let puzzle = Puzzle {
            answers: vec!["at".into()],
            options: vec!['a', 't'],
            attempts: 1,
        };
        let mut game = Game::new(puzzle).unwrap();
        game.submit_guess("ta");
        game.submit_guess("at");
        assert_eq!(plain_text(&format_status(&game)), WIN_MESSAGE);
    }
}
