use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;
pub mod tabs;

use crate::app::{App, InputMode};
use crate::core::NotifyLevel;

pub fn draw(f: &mut Frame, app: &mut App) {
    let areas = layout::areas(f.size());

    tabs::draw_header(f, &areas, app);
    tabs::draw_tab_bar(f, areas.tabs, app);
    app.active_panel_mut().render(f, areas.main);
    draw_footer(f, areas.footer, app);

    if app.help_open {
        draw_help_popup(f, areas.size, app);
    }
}

/// Get command hint for autocompletion
fn command_hint(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let commands = [
        ("queue", "Show OPD queue"),
        ("opd", "Show OPD queue"),
        ("beds", "Show bed availability"),
        ("wards", "Show bed availability"),
        ("inventory", "Show stock levels"),
        ("stock", "Show stock levels"),
        ("export", "Export view: export [csv|json]"),
        ("help", "Toggle help"),
        ("quit", "Quit"),
    ];

    commands
        .iter()
        .find(|(name, _)| name.starts_with(&input) || input.starts_with(name))
        .map(|(_, hint)| *hint)
}

fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Search => Line::from(vec![
            Span::styled("/ ", Style::default().fg(Color::Yellow)),
            Span::raw(app.search_text()),
            Span::styled(
                "  (Enter/Esc=done, Ctrl-u=clear)",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        InputMode::Command => {
            let hint = command_hint(&app.command.input);
            let hint_text =
                hint.unwrap_or("queue | beds | inventory | export [csv|json] | help | quit");
            Line::from(vec![
                Span::styled(": ", Style::default().fg(Color::Yellow)),
                Span::raw(&app.command.input),
                Span::styled(
                    format!("  {}", hint_text),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
        InputMode::Normal => {
            if let Some((text, level)) = app.status_text() {
                let color = match level {
                    NotifyLevel::Info => Color::LightGreen,
                    NotifyLevel::Warn => Color::LightYellow,
                    NotifyLevel::Error => Color::LightRed,
                };
                Line::from(vec![
                    Span::styled("msg: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(text, Style::default().fg(color)),
                ])
            } else {
                action_hints()
            }
        }
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn action_hints() -> Line<'static> {
    let hints = [
        ("1-3", "view"),
        ("Tab", "next"),
        ("j/k", "move"),
        ("/", "search"),
        (":", "command"),
        ("e", "export"),
        ("?", "help"),
        ("q", "quit"),
    ];
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (key, label) in hints {
        spans.push(Span::styled(key, Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            format!(" {label}  "),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn draw_help_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = centered_rect(60, 70, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from(format!("Active view: {}", app.active_view().title())),
        Line::from(""),
        Line::from("Views"),
        Line::from("  1 / 2 / 3    OPD Queue / Bed Management / Inventory"),
        Line::from("  Tab / ]      Next view"),
        Line::from("  S-Tab / [    Previous view"),
        Line::from("  Mouse        Click a tab to switch"),
        Line::from(""),
        Line::from("Rows"),
        Line::from("  j / k        Move highlight"),
        Line::from("  h / l        Move between ward cards"),
        Line::from("  g / G        First / last row"),
        Line::from(""),
        Line::from("Actions"),
        Line::from("  /            Edit search box"),
        Line::from("  :            Command line"),
        Line::from("  e            Export view as CSV"),
        Line::from("  ?            Toggle help"),
        Line::from("  q / Ctrl-c   Quit"),
        Line::from(""),
        Line::from("Commands"),
        Line::from("  :queue  :beds  :inventory  :export [csv|json]  :quit"),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
