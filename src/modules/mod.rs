//! Dashboard panels
//!
//! Each panel implements the Module trait and handles its own:
//! - Row highlight movement
//! - Rendering of its fixed dataset
//!
//! Panels:
//! - queue: outpatient queue table
//! - beds: ward availability cards
//! - inventory: stock level table
//!
//! Panels never see the search text; rows always come straight from the
//! static datasets in declaration order.

pub mod beds;
pub mod inventory;
pub mod queue;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::style::{Color, Modifier, Style};

/// Highlighted position within a fixed-length list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCursor {
    selected: usize,
    len: usize,
}

impl RowCursor {
    pub fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    pub fn selected(&self) -> Option<usize> {
        (self.len > 0).then_some(self.selected)
    }

    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn down(&mut self) {
        if self.selected + 1 < self.len {
            self.selected += 1;
        }
    }

    pub fn first(&mut self) {
        self.selected = 0;
    }

    pub fn last(&mut self) {
        self.selected = self.len.saturating_sub(1);
    }

    /// Apply a navigation key. Returns false if the key is not a movement key.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.up(),
            KeyCode::Down | KeyCode::Char('j') => self.down(),
            KeyCode::Home | KeyCode::Char('g') => self.first(),
            KeyCode::End | KeyCode::Char('G') => self.last(),
            _ => return false,
        }
        true
    }
}

fn header_style() -> Style {
    Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::BOLD)
}

fn highlight_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

fn title_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}
