//! Ratatui widgets for the nimbus TUI.

pub mod help;
pub mod matrix_grid;
pub mod query_bar;
