//! Single-line text entry.
//!
//! Owns the character buffer and cursor. The reducer treats it as opaque:
//! it forwards keys, reads `value()`, and calls `reset()` after a submit.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::text::{Line, Span};

use super::theme;

/// Maximum characters the buffer accepts.
pub const CHAR_LIMIT: usize = 20;

/// Drawn before the buffer.
pub const PROMPT: &str = "> ";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    chars: Vec<char>,
    /// Insertion point, `0..=chars.len()`.
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Clear the buffer and move the cursor home.
    pub fn reset(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }

    /// Apply an editing key. Keys with no editing meaning are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('a') if ctrl => self.cursor = 0,
            KeyCode::Char('e') if ctrl => self.cursor = self.chars.len(),
            KeyCode::Char('u') if ctrl => {
                self.chars.drain(..self.cursor);
                self.cursor = 0;
            }
            KeyCode::Char('k') if ctrl => self.chars.truncate(self.cursor),
            KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => {}
            KeyCode::Char(c) => self.insert(c),
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.chars.remove(self.cursor);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.chars.len() {
                    self.chars.remove(self.cursor);
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.chars.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.chars.len(),
            _ => {}
        }
    }

    fn insert(&mut self, c: char) {
        if self.chars.len() >= CHAR_LIMIT || c.is_control() {
            return;
        }
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
    }

    /// Prompt, buffer, and a reversed cell marking the cursor.
    pub fn view(&self) -> Line<'static> {
        let before: String = self.chars[..self.cursor].iter().collect();
        let (under, after): (String, String) = match self.chars.get(self.cursor) {
            Some(c) => (c.to_string(), self.chars[self.cursor + 1..].iter().collect()),
            None => (" ".to_string(), String::new()),
        };

        Line::from(vec![
            Span::raw(PROMPT),
            Span::raw(before),
            Span::styled(under, theme::cursor()),
            Span::raw(after),
        ])
    }
}

// ============================================================================
// TESTS
// ============================================================================
