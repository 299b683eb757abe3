//! Header and tab bar rendering

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs as RataTabs};
use ratatui::Frame;

use crate::app::{App, InputMode};
use crate::core::View;

use super::layout::UiAreas;

pub const SEARCH_PLACEHOLDER: &str = "Search...";
pub const MENU_ICON: &str = "≡";

const TAB_DIVIDER: &str = " │ ";
/// ratatui pads each tab title with one cell on either side
const TAB_PADDING: u16 = 1;

fn tab_titles() -> Vec<Line<'static>> {
    View::ALL
        .iter()
        .map(|view| {
            Line::from(vec![
                Span::styled(
                    format!("{}:", view.shortcut()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(view.title()),
            ])
        })
        .collect()
}

/// Draw title, search box and menu icon
pub fn draw_header(f: &mut Frame, areas: &UiAreas, app: &App) {
    let title = Line::from(vec![
        Span::styled(
            "✚ ",
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            app.title.as_str(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(
        Paragraph::new(title).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        areas.title,
    );

    let searching = app.input_mode == InputMode::Search;
    let search_line = if app.search_text().is_empty() && !searching {
        Line::from(vec![
            Span::styled("⌕ ", Style::default().fg(Color::DarkGray)),
            Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(Color::DarkGray)),
        ])
    } else {
        let mut spans = vec![
            Span::styled("⌕ ", Style::default().fg(Color::DarkGray)),
            Span::raw(app.search_text()),
        ];
        if searching {
            spans.push(Span::styled("▏", Style::default().fg(Color::Cyan)));
        }
        Line::from(spans)
    };
    let search_border = if searching {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    f.render_widget(
        Paragraph::new(search_line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(search_border),
        ),
        areas.search,
    );

    f.render_widget(
        Paragraph::new(MENU_ICON)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            ),
        areas.menu,
    );
}

/// Draw the view switcher
pub fn draw_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let tabs = RataTabs::new(tab_titles())
        .select(app.active_view().index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .divider(TAB_DIVIDER);

    f.render_widget(tabs, area);
}

/// The view whose tab covers column `col` of the tab bar
pub fn tab_at(area: Rect, col: u16) -> Option<View> {
    let divider = Line::from(TAB_DIVIDER).width() as u16;
    let mut x = area.x;
    for (view, title) in View::ALL.iter().zip(tab_titles()) {
        let width = TAB_PADDING * 2 + title.width() as u16;
        if col >= x && col < x.saturating_add(width) {
            return Some(*view);
        }
        x = x.saturating_add(width + divider);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_hit_testing() {
        let area = Rect::new(0, 3, 80, 1);
        // " 1:OPD Queue " spans columns 0..13
        assert_eq!(tab_at(area, 0), Some(View::Queue));
        assert_eq!(tab_at(area, 12), Some(View::Queue));
        // divider
        assert_eq!(tab_at(area, 14), None);
        // " 2:Bed Management " starts at 16
        assert_eq!(tab_at(area, 16), Some(View::Beds));
        assert_eq!(tab_at(area, 33), Some(View::Beds));
        // " 3:Inventory " starts at 37
        assert_eq!(tab_at(area, 38), Some(View::Inventory));
        assert_eq!(tab_at(area, 70), None);
    }
}
