//! Matrix grid widget — draws an extracted [`Matrix`] as a letter grid.
//!
//! Each cell takes two terminal columns (letter + gap). Letters of the
//! located term are drawn with the `grid.term` style, the centre cell gets
//! `grid.center` patched on top, and cells outside the corpus show a dim `·`.
//! The block title carries the search status.

use crate::theme::Theme;
use nimbus_core::{ElsReport, Matrix};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use std::collections::HashSet;

const SENTINEL_GLYPH: &str = "·";

/// What the grid pane currently shows.
#[derive(Debug, Clone, Default)]
pub enum GridContent {
    /// Nothing searched yet.
    #[default]
    Empty,
    Report(ElsReport),
    Error(String),
}

pub struct MatrixGrid<'a> {
    content: &'a GridContent,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> MatrixGrid<'a> {
    pub fn new(content: &'a GridContent, focused: bool, theme: &'a Theme) -> Self {
        Self { content, focused, theme }
    }

    fn title(&self) -> Line<'static> {
        match self.content {
            GridContent::Empty => Line::from(" Matrix "),
            GridContent::Report(r) => match &r.hit {
                Some(hit) => Line::from(Span::styled(
                    format!(" {} at {} (skip {}) ", r.term, hit.start_index, hit.skip),
                    self.theme.status_found,
                )),
                None => Line::from(Span::styled(
                    format!(" {} not found ", r.term),
                    self.theme.status_not_found,
                )),
            },
            GridContent::Error(msg) => {
                Line::from(Span::styled(format!(" {msg} "), self.theme.status_error))
            }
        }
    }
}

impl Widget for MatrixGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };
        let block = Block::bordered().title(self.title()).border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let GridContent::Report(report) = self.content else {
            let hint = Line::from(Span::styled(
                "type a term, optionally a skip, and press Enter",
                self.theme.grid_sentinel,
            ));
            Paragraph::new(hint).render(inner, buf);
            return;
        };
        let Some(hit) = &report.hit else {
            return;
        };

        let highlight: HashSet<(usize, usize)> = hit.positions.iter().copied().collect();
        draw_cells(&hit.matrix, &highlight, self.theme, inner, buf);
    }
}

fn draw_cells(
    matrix: &Matrix,
    highlight: &HashSet<(usize, usize)>,
    theme: &Theme,
    area: Rect,
    buf: &mut Buffer,
) {
    let size = matrix.size();
    let center = size / 2;
    // Centre the grid in the pane.
    let width = (size * 2).saturating_sub(1) as u16;
    let x0 = area.x + area.width.saturating_sub(width) / 2;
    let y0 = area.y + area.height.saturating_sub(size as u16) / 2;

    for (row, cells) in matrix.rows().enumerate() {
        let y = y0 + row as u16;
        if y >= area.bottom() {
            break;
        }
        for (col, cell) in cells.iter().enumerate() {
            let x = x0 + (col * 2) as u16;
            if x >= area.right() {
                break;
            }
            let mut style: Style = match cell {
                None => theme.grid_sentinel,
                Some(_) if highlight.contains(&(row, col)) => theme.grid_term,
                Some(_) => theme.grid_letter,
            };
            if row == center && col == center {
                style = style.patch(theme.grid_center);
            }
            match cell {
                Some(c) => buf.set_string(x, y, c.to_string(), style),
                None => buf.set_string(x, y, SENTINEL_GLYPH, style),
            };
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
