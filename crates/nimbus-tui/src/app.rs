//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.

use crate::{
    event::{self, AppEvent},
    theme::Theme,
    widgets::{
        help::HelpPopup,
        matrix_grid::{GridContent, MatrixGrid},
        query_bar::{Field, QueryBar, QueryBarState},
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use nimbus_core::{config::Config, run_query, TextBuffer};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout},
    Frame, Terminal,
};
use std::{io, time::Duration};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Term,
    Skip,
    Grid,
}

impl Focus {
    fn field(self) -> Option<Field> {
        match self {
            Focus::Term => Some(Field::Term),
            Focus::Skip => Some(Field::Skip),
            Focus::Grid => None,
        }
    }
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub corpus: TextBuffer,
    pub config: Config,
    pub theme: Theme,
    pub query: QueryBarState,
    pub grid: GridContent,
    /// Current matrix edge length; always odd.
    pub size: usize,
    pub focus: Focus,
    pub show_help: bool,
    pub quit: bool,
}

impl AppState {
    pub fn new(
        corpus: TextBuffer,
        config: Config,
        theme: Theme,
        term: Option<String>,
        skip: Option<i64>,
    ) -> Self {
        let run_now = term.is_some();
        let mut state = AppState {
            size: config.matrix.size,
            corpus,
            config,
            theme,
            query: QueryBarState::new(term, skip),
            grid: GridContent::Empty,
            focus: Focus::Term,
            show_help: false,
            quit: false,
        };
        if run_now {
            state.search();
            state.focus = Focus::Grid;
        }
        state
    }

    pub fn handle(&mut self, event: AppEvent) {
        // Help popup intercepts all events; only close keys pass through.
        if self.show_help {
            if matches!(event, AppEvent::Help | AppEvent::Escape | AppEvent::Quit) {
                tracing::debug!("help popup closed");
                self.show_help = false;
            }
            return;
        }

        match event {
            AppEvent::Quit => {
                tracing::debug!("quit");
                self.quit = true;
            }
            AppEvent::Help => {
                tracing::debug!("help popup opened");
                self.show_help = true;
            }
            AppEvent::Escape => {
                if self.focus != Focus::Grid {
                    tracing::debug!(from = ?self.focus, "focus -> Grid");
                    self.focus = Focus::Grid;
                }
            }
            AppEvent::FocusNext => {
                let next = match self.focus {
                    Focus::Term => Focus::Skip,
                    Focus::Skip => Focus::Grid,
                    Focus::Grid => Focus::Term,
                };
                tracing::debug!(from = ?self.focus, to = ?next, "focus cycle");
                self.focus = next;
            }
            AppEvent::QueryFocus => {
                self.focus = Focus::Term;
            }
            AppEvent::SizeUp => {
                if self.size + 2 <= self.config.matrix.max_size {
                    self.size += 2;
                    tracing::debug!(size = self.size, "matrix size up");
                    self.refresh();
                }
            }
            AppEvent::SizeDown => {
                if self.size > 1 {
                    self.size -= 2;
                    tracing::debug!(size = self.size, "matrix size down");
                    self.refresh();
                }
            }
            AppEvent::Enter => self.search(),
            AppEvent::Resize(_, _) => {}
            other => {
                if let Some(field) = self.focus.field() {
                    self.query.field_mut(field).handle(&other);
                }
            }
        }
    }

    /// Run the query in the input fields and replace the grid content.
    pub fn search(&mut self) {
        self.grid = match self.query.to_query(self.size) {
            Err(msg) => GridContent::Error(msg),
            Ok(query) => match run_query(&self.corpus, &query, &self.config) {
                Ok(report) => {
                    tracing::info!(
                        term = %report.term,
                        found = report.found,
                        size = self.size,
                        "search finished"
                    );
                    GridContent::Report(report)
                }
                Err(e) => {
                    tracing::debug!(error = %e, "search rejected");
                    GridContent::Error(e.to_string())
                }
            },
        };
    }

    /// Re-run the last search after a size change, if one is on screen.
    fn refresh(&mut self) {
        if matches!(self.grid, GridContent::Report(_)) {
            self.search();
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(state: AppState) -> Self {
        App { state }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                let raw = ct_event::read()?;
                if let Event::Key(key) = &raw {
                    if key.kind != ct_event::KeyEventKind::Press {
                        continue;
                    }
                }
                let app_event = if self.state.focus.field().is_some() {
                    event::to_app_event_insert(raw)
                } else {
                    event::to_app_event(raw)
                };
                if let Some(ev) = app_event {
                    tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                    self.state.handle(ev);
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: matrix | 3-line query bar
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(3)])
        .split(area);

    frame.render_widget(
        MatrixGrid::new(&state.grid, state.focus == Focus::Grid, &state.theme),
        vert[0],
    );

    let query_bar = QueryBar::new(&state.query, state.focus.field(), state.size, &state.theme);
    let cursor = query_bar.cursor_position(vert[1]);
    frame.render_widget(query_bar, vert[1]);

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    } else if let Some(pos) = cursor {
        frame.set_cursor_position(pos);
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
