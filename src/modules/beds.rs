//! Bed management panel - one availability card per ward

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::{title_style, RowCursor};
use crate::core::{Action, Module};
use crate::data::{WardStatus, WARDS};

pub const TITLE: &str = "Bed Availability";

const CARD_HEIGHT: u16 = 4;

/// Cards in declaration order
pub fn cards() -> &'static [WardStatus] {
    WARDS
}

pub fn card_title(ward: &WardStatus) -> String {
    format!("{} Ward", ward.ward)
}

/// Number of card columns for a given width
pub fn grid_columns(width: u16) -> usize {
    if width >= 100 {
        4
    } else if width >= 50 {
        2
    } else {
        1
    }
}

#[derive(Debug, Clone)]
pub struct BedsPanel {
    cursor: RowCursor,
}

impl BedsPanel {
    pub fn new() -> Self {
        Self {
            cursor: RowCursor::new(WARDS.len()),
        }
    }

    pub fn selected(&self) -> Option<&'static WardStatus> {
        self.cursor.selected().and_then(|idx| WARDS.get(idx))
    }
}

impl Default for BedsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for BedsPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        // Cards sit in a grid, so left/right move like up/down.
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.cursor.up(),
            KeyCode::Right | KeyCode::Char('l') => self.cursor.down(),
            _ => {
                self.cursor.handle_key(key);
            }
        }
        Action::None
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(TITLE, title_style()))),
            chunks[0],
        );

        let columns = grid_columns(chunks[1].width);
        let grid_rows = cards().len().div_ceil(columns);

        let mut row_constraints: Vec<Constraint> =
            (0..grid_rows).map(|_| Constraint::Length(CARD_HEIGHT)).collect();
        row_constraints.push(Constraint::Min(0));
        let row_areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints(row_constraints)
            .split(chunks[1]);

        let selected = self.cursor.selected();
        for (row_idx, wards) in cards().chunks(columns).enumerate() {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints((0..columns).map(|_| Constraint::Ratio(1, columns as u32)))
                .split(row_areas[row_idx]);

            for (col_idx, ward) in wards.iter().enumerate() {
                let is_selected = selected == Some(row_idx * columns + col_idx);
                draw_card(frame, cells[col_idx], ward, is_selected);
            }
        }
    }
}

fn draw_card(frame: &mut Frame, area: Rect, ward: &WardStatus, is_selected: bool) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let available_color = if ward.is_consistent() {
        Color::LightBlue
    } else {
        Color::LightRed
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(card_title(ward))
        .border_style(border_style);

    let lines = vec![
        Line::from(vec![
            Span::styled("Available: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                ward.available.to_string(),
                Style::default()
                    .fg(available_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Total: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                ward.total.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
