//! Lane Runner - terminal endless runner.
//!
//! The game core (`runner`, `core`) has no terminal dependency; `ui` and
//! `input` adapt it to ratatui and crossterm.

pub mod build_info;
pub mod core;
pub mod input;
pub mod runner;
pub mod ui;
pub mod utils;
