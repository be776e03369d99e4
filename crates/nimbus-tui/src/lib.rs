//! nimbus TUI — ratatui matrix viewer.

pub mod app;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::{App, AppState};

use nimbus_core::{config::Config, TextBuffer};

/// Open the viewer on `corpus`. When `term` is given the first search runs
/// before the screen is drawn.
pub fn run(
    corpus: TextBuffer,
    config: Config,
    term: Option<String>,
    skip: Option<i64>,
) -> anyhow::Result<()> {
    let theme = theme::Theme::by_name(&config.ui.theme);
    App::new(AppState::new(corpus, config, theme, term, skip)).run()
}
