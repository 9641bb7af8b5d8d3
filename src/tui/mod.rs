//! TUI module for the interactive game.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (App, AppEvent)
//! - `update`: pure transitions (the event reducer)
//! - `status`, `layout`, `view`: pure rendering (status line, sizing, frame)
//! - `compose`, `theme`, `input`: building blocks the renderer draws with
//! - `run`: effects (terminal lifecycle, event loop)

pub mod compose;
pub mod input;
pub mod layout;
pub mod run;
pub mod state;
pub mod status;
pub mod theme;
pub mod update;
pub mod view;
