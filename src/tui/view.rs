//! Pure rendering: map App state to a full-screen frame.
//!
//! Two bordered panels side by side, centered on the terminal:
//! - left: prompt and input, then a status bar pinned to the bottom
//!   (just the status once the game is over)
//! - right: the option letters in cells, found answers below
//!
//! Panel interiors are sized from the terminal, and blank fillers take up
//! whatever the measured content leaves over (see [`super::layout`]).
//! `compose_frame` is pure; `render` only hands its result to ratatui.

use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::game::Game;

use super::compose::{self, Align, CellMeasure, Measure};
use super::input::TextInput;
use super::layout::{self, PanelSize};
use super::state::App;
use super::theme;

pub const PROMPT_TEXT: &str = "Guess a word from the given letters ...";
pub const CREDIT: &str = "word-connector";

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current app to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let text = compose_frame(app, &CellMeasure);
    frame.render_widget(Paragraph::new(text), frame.area());
}

/// Build the frame for the last known terminal size.
pub fn compose_frame(app: &App, measure: &impl Measure) -> Text<'static> {
    let panel = layout::panel_size(app.width, app.height);

    let left = input_and_status_panel(app, panel, measure);
    let right = options_and_answers_panel(&app.game, panel, app.height, measure);

    compose::place(
        usize::from(app.width),
        usize::from(app.height),
        Align::Center,
        Align::Center,
        compose::join_horizontal(Align::Center, vec![left, right]),
    )
}

fn wrap_with_border(content: Text<'static>, panel: PanelSize) -> Text<'static> {
    compose::bordered(content, panel.width, panel.height, theme::panel_border())
}

// ============================================================================
// LEFT PANEL: INPUT AND STATUS
// ============================================================================

fn input_and_status_panel(app: &App, panel: PanelSize, measure: &impl Measure) -> Text<'static> {
    if app.game.is_over() {
        return wrap_with_border(app.status.clone(), panel);
    }

    let prompt = prompt_block(&app.input);
    let credit = credit_label();
    let plan = layout::plan_left_panel(panel, &prompt, &app.status, &credit, measure);

    let status_bar = compose::join_horizontal(
        Align::Center,
        vec![
            app.status.clone(),
            compose::blank(plan.status_filler_width, 1, theme::status_bar()),
            credit,
        ],
    );

    wrap_with_border(
        compose::join_vertical(
            Align::Start,
            vec![
                prompt,
                compose::blank(0, plan.filler_height, Style::new()),
                status_bar,
            ],
        ),
        panel,
    )
}

fn prompt_block(input: &TextInput) -> Text<'static> {
    Text::from(vec![Line::from(PROMPT_TEXT), Line::default(), input.view()])
}

/// Credit label with one cell of margin on each side.
fn credit_label() -> Text<'static> {
    Text::from(Line::from(vec![
        Span::raw(" "),
        Span::styled(format!(" {} ", CREDIT), theme::credit()),
        Span::raw(" "),
    ]))
}

// ============================================================================
// RIGHT PANEL: OPTIONS AND ANSWERS
// ============================================================================

fn options_and_answers_panel(
    game: &Game,
    panel: PanelSize,
    term_height: u16,
    measure: &impl Measure,
) -> Text<'static> {
    let options = compose::join_horizontal(
        Align::Center,
        game.options().iter().map(|&letter| option_cell(letter)).collect(),
    );
    let answers = found_answers(game);
    let plan = layout::plan_right_panel(panel, term_height, &options, &answers, measure);

    let column = compose::join_vertical(
        Align::Center,
        vec![
            options,
            compose::blank(0, plan.filler_height, Style::new()),
            answers,
        ],
    );

    wrap_with_border(
        compose::place(panel.width, panel.height, Align::Center, Align::Center, column),
        panel,
    )
}

fn option_cell(letter: char) -> Text<'static> {
    let label = compose::styled(format!(" {} ", letter), Style::new());
    let width = label.width();
    compose::bordered(label, width, 1, theme::option_border())
}

/// Found words, one per row, in discovery order.
fn found_answers(game: &Game) -> Text<'static> {
    compose::join_vertical(
        Align::Start,
        game.found_words()
            .map(|word| compose::styled(word, theme::correct_answer()))
            .collect(),
    )
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::compose::plain_text;
    use crate::tui::state::AppEvent;
    use crate::tui::status::{LOSS_MESSAGE, WIN_MESSAGE};
    use crate::tui::update::update;
    use crate::types::Puzzle;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn app_at(width: u16, height: u16) -> App {
        App::new(Game::new(Puzzle::default()).unwrap(), width, height)
    }

    fn guess(mut app: App, word: &str) -> App {
        for c in word.chars() {
            app = update(app, AppEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)));
        }
        update(app, AppEvent::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)))
    }

    fn screen(app: &App) -> String {
        let backend = TestBackend::new(app.width, app.height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    /// Reports the same size for every block.
    struct FixedMeasure {
        width: usize,
        height: usize,
    }

    impl Measure for FixedMeasure {
        fn width(&self, _: &Text<'_>) -> usize {
            self.width
        }

        fn height(&self, _: &Text<'_>) -> usize {
            self.height
        }
    }

    #[test]
    fn frame_fills_the_terminal_exactly() {
        for (width, height) in [(20, 10), (80, 24), (81, 25), (120, 40), (200, 60)] {
            let app = app_at(width, height);
            let frame = compose_frame(&app, &CellMeasure);
            assert_eq!(frame.height(), usize::from(height), "{}x{}", width, height);
            assert!(
                frame.lines.iter().all(|line| line.width() == usize::from(width)),
                "{}x{}",
                width,
                height
            );
        }
    }

    #[test]
    fn panels_are_sized_to_their_quota() {
        let app = app_at(80, 24);
        let panel = layout::panel_size(80, 24);
        let left = input_and_status_panel(&app, panel, &CellMeasure);
        let right = options_and_answers_panel(&app.game, panel, 24, &CellMeasure);

        for block in [left, right] {
            assert_eq!(block.height(), panel.height + 2);
            assert_eq!(block.width(), panel.width + 2);
        }
    }

    #[test]
    fn left_panel_pins_status_to_the_bottom() {
        let app = app_at(160, 40);
        let panel = layout::panel_size(160, 40);
        let text = plain_text(&input_and_status_panel(&app, panel, &CellMeasure));
        let rows: Vec<&str> = text.split('\n').collect();

        assert!(rows[1].contains(PROMPT_TEXT));
        assert!(rows[3].contains("> "));
        // Interior bottom row, just above the border
        let status_row = rows[rows.len() - 2];
        assert!(status_row.contains("4 words to go"));
        assert!(status_row.contains("5 attempts left"));
        assert!(status_row.trim_end_matches('│').trim_end().ends_with(CREDIT));
    }

    #[test]
    fn fake_measurer_drives_filler_sizes() {
        // Blocks "measure" taller than the panel: fillers collapse to zero
        // and the content is clipped to the quota instead of growing it.
        let app = app_at(80, 24);
        let panel = layout::panel_size(80, 24);
        let huge = FixedMeasure { width: 500, height: 500 };

        let left = input_and_status_panel(&app, panel, &huge);
        let right = options_and_answers_panel(&app.game, panel, 24, &huge);
        assert_eq!(left.height(), panel.height + 2);
        assert_eq!(right.height(), panel.height + 2);
        assert_eq!(left.width(), panel.width + 2);

        // Zero-sized measurements hand every row to the filler.
        let tiny = FixedMeasure { width: 0, height: 0 };
        let frame = compose_frame(&app, &tiny);
        assert_eq!(frame.height(), 24);
    }

    #[test]
    fn playing_screen_shows_prompt_options_and_status() {
        let content = screen(&app_at(160, 40));
        assert!(content.contains("Guess a word"));
        assert!(content.contains("4 words to go"));
        assert!(content.contains("5 attempts left"));
        assert!(content.contains(CREDIT));
        assert!(content.contains("│ a │"));
        assert!(content.contains("│ e │"));
        assert!(content.contains("│ t │"));
    }

    #[test]
    fn small_terminal_still_renders() {
        let content = screen(&app_at(20, 10));
        assert!(content.contains("┌"));
    }

    #[test]
    fn found_answers_listed_in_discovery_order() {
        let app = guess(guess(app_at(160, 40), "ate"), "tea");
        let frame = plain_text(&compose_frame(&app, &CellMeasure));
        let ate = frame.find("ate").expect("ate shown");
        let tea = frame.find("tea").expect("tea shown");
        assert!(ate < tea);
        assert!(frame.contains("2 words to go"));
    }

    #[test]
    fn found_answers_are_styled() {
        let app = guess(app_at(160, 40), "eat");
        let answers = found_answers(&app.game);
        assert_eq!(answers.lines[0].spans[0].style, theme::correct_answer());
    }

    #[test]
    fn typed_text_appears_in_the_input() {
        let mut app = app_at(160, 40);
        for c in "ta".chars() {
            app = update(app, AppEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)));
        }
        assert!(screen(&app).contains("> ta"));
    }

    #[test]
    fn won_game_shows_only_the_win_message_on_the_left() {
        let mut app = app_at(160, 40);
        for word in ["tea", "eat", "ate", "at"] {
            app = guess(app, word);
        }
        let content = screen(&app);
        assert!(content.contains("won the game"));
        assert!(!content.contains("Guess a word"));

        let panel = layout::panel_size(160, 40);
        let left = plain_text(&input_and_status_panel(&app, panel, &CellMeasure));
        assert!(left.contains(WIN_MESSAGE));
    }

    #[test]
    fn lost_game_shows_the_loss_message() {
        let mut app = app_at(160, 40);
        for word in ["a1", "a2", "a3", "a4", "a5"] {
            app = guess(app, word);
        }
        let content = screen(&app);
        assert!(content.contains(LOSS_MESSAGE));
        assert!(!content.contains("Guess a word"));
    }

    #[test]
    fn resize_reflows_the_frame() {
        let app = update(app_at(80, 24), AppEvent::Resize { width: 100, height: 30 });
        let frame = compose_frame(&app, &CellMeasure);
        assert_eq!(frame.height(), 30);
        assert!(frame.lines.iter().all(|line| line.width() == 100));
    }
}
