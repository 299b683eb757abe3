//! OPD queue panel - patients waiting for consultation

use crossterm::event::KeyEvent;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use super::{header_style, highlight_style, title_style, RowCursor};
use crate::core::{Action, Module};
use crate::data::{QueueEntry, QUEUE};

pub const TITLE: &str = "Current Queue Status";
pub const COLUMNS: [&str; 3] = ["Patient Name", "Department", "Estimated Wait Time"];

/// Table rows in declaration order: (name, department, wait time)
pub fn rows() -> Vec<[String; 3]> {
    QUEUE.iter().map(row).collect()
}

fn row(entry: &QueueEntry) -> [String; 3] {
    [
        entry.name.to_string(),
        entry.department.to_string(),
        entry.wait_time.to_string(),
    ]
}

pub fn waiting_label(count: usize) -> String {
    format!("{count} patients waiting")
}

#[derive(Debug, Clone)]
pub struct QueuePanel {
    cursor: RowCursor,
}

impl QueuePanel {
    pub fn new() -> Self {
        Self {
            cursor: RowCursor::new(QUEUE.len()),
        }
    }

    pub fn selected(&self) -> Option<&'static QueueEntry> {
        self.cursor.selected().and_then(|idx| QUEUE.get(idx))
    }
}

impl Default for QueuePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Module for QueuePanel {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        self.cursor.handle_key(key);
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
            .constraints([
                Constraint::Length(2), // title row
                Constraint::Min(0),    // table
            ])
            .split(inner);

        let title_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[0]);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(TITLE, title_style()))),
            title_chunks[0],
        );
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("◉ ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    waiting_label(QUEUE.len()),
                    Style::default().fg(Color::Gray),
                ),
            ]))
            .alignment(Alignment::Right),
            title_chunks[1],
        );

        let header = Row::new(COLUMNS).style(header_style()).bottom_margin(1);
        let body: Vec<Row> = rows().into_iter().map(Row::new).collect();
        let table = Table::new(
            body,
            [
                Constraint::Percentage(35),
                Constraint::Percentage(35),
                Constraint::Percentage(30),
            ],
        )
        .header(header)
        .highlight_style(highlight_style())
        .highlight_symbol("> ");

        let mut state = TableState::default();
        state.select(self.cursor.selected());
        frame.render_stateful_widget(table, chunks[1], &mut state);
    }
}
