//! Query bar widget — term and skip inputs at the bottom of the screen.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor of the focused field.
//! - `Backspace` deletes the character before the cursor.
//! - `Cursor(Left)` / `Cursor(Right)` move the cursor.
//!
//! An empty skip field means "scan the configured skip range".

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use nimbus_core::ElsQuery;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

const TERM_LABEL: &str = "term: ";
const SKIP_LABEL: &str = "skip: ";
const SKIP_WIDTH: u16 = 18;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Single-line text input with a byte-offset cursor.
#[derive(Debug, Default, Clone)]
pub struct TextField {
    pub text: String,
    pub cursor: usize,
}

impl TextField {
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self { cursor: text.len(), text }
    }

    pub fn handle(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Char(c) => {
                self.text.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                tracing::debug!(text = %self.text, cursor = self.cursor, "field: char inserted");
            }
            AppEvent::Backspace => {
                if let Some((prev, _)) = self.text[..self.cursor].char_indices().last() {
                    self.text.remove(prev);
                    self.cursor = prev;
                }
            }
            AppEvent::Cursor(Direction::Left) => {
                if let Some((prev, _)) = self.text[..self.cursor].char_indices().last() {
                    self.cursor = prev;
                }
            }
            AppEvent::Cursor(Direction::Right) => {
                if let Some(c) = self.text[self.cursor..].chars().next() {
                    self.cursor += c.len_utf8();
                }
            }
            _ => {}
        }
    }

    /// Cursor column in terminal cells (one per char).
    fn cursor_col(&self) -> u16 {
        self.text[..self.cursor].chars().count() as u16
    }
}

/// Which query field has the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Term,
    Skip,
}

#[derive(Debug, Default)]
pub struct QueryBarState {
    pub term: TextField,
    pub skip: TextField,
}

impl QueryBarState {
    pub fn new(term: Option<String>, skip: Option<i64>) -> Self {
        Self {
            term: TextField::with_text(term.unwrap_or_default()),
            skip: TextField::with_text(skip.map(|s| s.to_string()).unwrap_or_default()),
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut TextField {
        match field {
            Field::Term => &mut self.term,
            Field::Skip => &mut self.skip,
        }
    }

    /// Build a query from the current input. Fails with a user-facing
    /// message when the skip field is not a whole number.
    pub fn to_query(&self, size: usize) -> Result<ElsQuery, String> {
        let mut query = ElsQuery::new(self.term.text.clone()).size(size);
        let skip = self.skip.text.trim();
        if !skip.is_empty() {
            let skip: i64 = skip
                .parse()
                .map_err(|_| format!("skip must be a whole number, got {skip:?}"))?;
            query = query.skip(skip);
        }
        Ok(query)
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct QueryBar<'a> {
    state: &'a QueryBarState,
    focus: Option<Field>,
    size: usize,
    theme: &'a Theme,
}

impl<'a> QueryBar<'a> {
    pub fn new(state: &'a QueryBarState, focus: Option<Field>, size: usize, theme: &'a Theme) -> Self {
        Self { state, focus, size, theme }
    }

    fn split(area: Rect) -> (Rect, Rect, Rect) {
        let inner = Block::bordered().inner(area);
        let chunks = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(SKIP_WIDTH),
                Constraint::Length(10),
            ])
            .split(inner);
        (chunks[0], chunks[1], chunks[2])
    }

    /// Absolute terminal position of the text cursor for the focused field.
    pub fn cursor_position(&self, area: Rect) -> Option<(u16, u16)> {
        let (term_area, skip_area, _) = Self::split(area);
        let (field, rect, label) = match self.focus? {
            Field::Term => (&self.state.term, term_area, TERM_LABEL),
            Field::Skip => (&self.state.skip, skip_area, SKIP_LABEL),
        };
        let x = rect.x + label.len() as u16 + field.cursor_col();
        Some((x.min(rect.right().saturating_sub(1)), rect.y))
    }
}

impl Widget for QueryBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focus.is_some() {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };
        Block::bordered().title("Query").border_style(border_style).render(area, buf);

        let (term_area, skip_area, size_area) = Self::split(area);
        let label = Style::default().add_modifier(Modifier::BOLD);

        let term = if self.state.term.text.is_empty() && self.focus.is_none() {
            Span::styled("press / to search", Style::default().add_modifier(Modifier::DIM))
        } else {
            Span::raw(self.state.term.text.as_str())
        };
        Paragraph::new(Line::from(vec![Span::styled(TERM_LABEL, label), term]))
            .render(term_area, buf);

        let skip = if self.state.skip.text.is_empty() {
            Span::styled("scan", Style::default().add_modifier(Modifier::DIM))
        } else {
            Span::raw(self.state.skip.text.as_str())
        };
        Paragraph::new(Line::from(vec![Span::styled(SKIP_LABEL, label), skip]))
            .render(skip_area, buf);

        Paragraph::new(Line::from(format!("size:{}", self.size))).render(size_area, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
