//! Keyboard and mouse dispatch

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{App, InputMode};
use crate::core::{Action, ExportFormat, View};
use crate::ui;
use crate::ui::layout::rect_contains;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.help_open = false;
        }
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Search => handle_search_mode(app, key),
        InputMode::Command => handle_command_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) => app.should_quit = true,
        (KeyCode::Char('?'), _) => app.help_open = true,
        (KeyCode::Char('/'), _) => app.enter_search(),
        (KeyCode::Char(':'), _) => app.enter_command(),
        (KeyCode::Char('e'), _) => app.apply_action(Action::Export(ExportFormat::Csv)),
        (KeyCode::Tab, _) | (KeyCode::Char(']'), _) => app.next_view(),
        (KeyCode::BackTab, _) | (KeyCode::Char('['), _) => app.prev_view(),
        (KeyCode::Char(ch @ '1'..='3'), _) => {
            if let Some(view) = View::from_shortcut(ch) {
                app.select_view(view);
            }
        }
        _ => app.handle_panel_key(key),
    }
}

fn handle_search_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.exit_search(),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.set_search_text(String::new());
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.push_search_char(ch);
        }
        _ => {}
    }
}

fn handle_command_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_command(),
        KeyCode::Enter => app.apply_command(),
        KeyCode::Backspace => {
            app.command.input.pop();
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.command.input.push(ch);
        }
        _ => {}
    }
}

/// Mouse handling against a terminal of `size`
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, size: Rect) {
    if app.help_open || app.input_mode == InputMode::Command {
        return;
    }
    let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
        return;
    };

    let areas = ui::layout::areas(size);
    let (col, row) = (mouse.column, mouse.row);

    if rect_contains(areas.tabs, col, row) {
        if let Some(view) = ui::tabs::tab_at(areas.tabs, col) {
            app.select_view(view);
        }
        return;
    }
    if rect_contains(areas.search, col, row) {
        app.enter_search();
        return;
    }
    // Clicking anywhere else leaves the search box; the menu icon has no action.
    if app.input_mode == InputMode::Search && !rect_contains(areas.menu, col, row) {
        app.exit_search();
    }
}
