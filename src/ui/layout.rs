use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const SEARCH_WIDTH: u16 = 34;
pub const MENU_WIDTH: u16 = 5;

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub header: Rect,
    pub title: Rect,
    pub search: Rect,
    pub menu: Rect,
    pub tabs: Rect,
    pub main: Rect,
    pub footer: Rect,
}

pub fn areas(size: Rect) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(1), // tab bar
            Constraint::Min(0),    // active panel
            Constraint::Length(1), // status / input line
        ])
        .split(size);

    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(SEARCH_WIDTH),
            Constraint::Length(MENU_WIDTH),
        ])
        .split(vertical[0]);

    UiAreas {
        size,
        header: vertical[0],
        title: header_chunks[0],
        search: header_chunks[1],
        menu: header_chunks[2],
        tabs: vertical[1],
        main: vertical[2],
        footer: vertical[3],
    }
}

pub fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
