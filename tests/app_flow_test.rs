//! Drive the app through key sequences the way a user would

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hospital_dash::app::{App, InputMode};
use hospital_dash::core::{NotifyLevel, View};
use hospital_dash::input::handle_key;
use hospital_dash::modules::{inventory, queue};

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_str(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn app_with_export_dir(dir: &std::path::Path) -> App {
    App::new("City Hospital Management", dir.to_path_buf())
}

#[test]
fn test_view_switching_with_shortcuts() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with_export_dir(dir.path());
    assert_eq!(app.active_view(), View::Queue);

    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.active_view(), View::Beds);
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.active_view(), View::Beds);
    press(&mut app, KeyCode::Char(']'));
    assert_eq!(app.active_view(), View::Inventory);
    press(&mut app, KeyCode::Char('['));
    press(&mut app, KeyCode::Char('['));
    assert_eq!(app.active_view(), View::Queue);
}

#[test]
fn test_search_then_select_queue_leaves_rows_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with_export_dir(dir.path());
    let rows_before = queue::rows();

    press(&mut app, KeyCode::Char('/'));
    assert_eq!(app.input_mode, InputMode::Search);
    type_str(&mut app, "xyz");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.search_text(), "xyz");

    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.active_view(), View::Queue);
    assert_eq!(app.search_text(), "xyz");
    assert_eq!(queue::rows(), rows_before);
    assert_eq!(queue::waiting_label(rows_before.len()), "3 patients waiting");
}

#[test]
fn test_search_survives_view_changes() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with_export_dir(dir.path());
    press(&mut app, KeyCode::Char('/'));
    type_str(&mut app, "Bandages");
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Esc);

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.search_text(), "Bandage");
    assert_eq!(inventory::rows().len(), 4);
}

#[test]
fn test_command_line_navigation_and_errors() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with_export_dir(dir.path());

    press(&mut app, KeyCode::Char(':'));
    type_str(&mut app, "inventory");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.active_view(), View::Inventory);

    press(&mut app, KeyCode::Char(':'));
    type_str(&mut app, "admit");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.active_view(), View::Inventory);
    let (text, level) = app.status_text().unwrap();
    assert_eq!(level, NotifyLevel::Warn);
    assert!(text.contains("admit"));

    press(&mut app, KeyCode::Char(':'));
    type_str(&mut app, "beds");
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.active_view(), View::Inventory);
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn test_row_highlight_is_per_panel() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with_export_dir(dir.path());

    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.queue.selected().map(|e| e.name), Some("Mike Johnson"));

    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.inventory.selected().map(|i| i.item), Some("Surgical Masks"));

    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.queue.selected().map(|e| e.name), Some("Mike Johnson"));
}

#[test]
fn test_export_key_writes_active_view() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with_export_dir(dir.path());

    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.status_text().map(|(_, level)| level), Some(NotifyLevel::Info));

    let files: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("inventory-"));
    assert!(files[0].ends_with(".csv"));
}

#[test]
fn test_quit() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with_export_dir(dir.path());
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}
