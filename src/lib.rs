//! word-connector: find every word hidden in a handful of letters.

pub mod game;
pub mod logging;
pub mod report;
pub mod tui;
pub mod types;
