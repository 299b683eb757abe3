//! Draw the dashboard into an in-memory terminal and check what is shown

use hospital_dash::app::App;
use hospital_dash::core::View;
use hospital_dash::ui;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

const WIDTH: u16 = 120;
const HEIGHT: u16 = 30;

fn app() -> App {
    App::new("City Hospital Management", std::env::temp_dir())
}

fn render(app: &mut App) -> Vec<String> {
    render_at(app, WIDTH)
}

fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer.get(x, y).symbol())
                .collect::<String>()
        })
        .collect()
}

/// Row index of the first line containing `needle`
fn line_of(lines: &[String], needle: &str) -> usize {
    lines
        .iter()
        .position(|line| line.contains(needle))
        .unwrap_or_else(|| panic!("{needle:?} not rendered:\n{}", lines.join("\n")))
}

fn assert_queue_rows(lines: &[String]) {
    let expected = [
        ("John Doe", "Cardiology", "15 mins"),
        ("Jane Smith", "Orthopedics", "25 mins"),
        ("Mike Johnson", "Pediatrics", "10 mins"),
    ];
    let mut previous = 0;
    for (name, department, wait) in expected {
        let row = line_of(lines, name);
        assert!(row > previous, "{name} out of order");
        assert!(lines[row].contains(department));
        assert!(lines[row].contains(wait));
        previous = row;
    }
}

#[test]
fn initial_load_shows_queue() {
    let mut app = app();
    let lines = render(&mut app);

    assert!(lines[1].contains("City Hospital Management"));
    assert!(lines[1].contains("Search..."));
    assert!(lines[1].contains("≡"));
    assert!(lines[3].contains("OPD Queue"));
    assert!(lines[3].contains("Bed Management"));
    assert!(lines[3].contains("Inventory"));

    let title = line_of(&lines, "Current Queue Status");
    assert!(lines[title].contains("3 patients waiting"));
    let header = line_of(&lines, "Patient Name");
    assert!(lines[header].contains("Department"));
    assert!(lines[header].contains("Estimated Wait Time"));
    assert_queue_rows(&lines);
}

#[test]
fn beds_view_shows_cards_in_order() {
    let mut app = app();
    app.select_view(View::Beds);
    let lines = render(&mut app);

    line_of(&lines, "Bed Availability");
    // 120 columns wide: all four cards share one row, left to right
    let row = line_of(&lines, "General Ward");
    let titles = ["General Ward", "ICU Ward", "Emergency Ward", "Pediatric Ward"];
    let columns: Vec<usize> = titles
        .iter()
        .map(|title| lines[row].find(title).unwrap_or_else(|| panic!("{title} missing")))
        .collect();
    assert!(columns.windows(2).all(|pair| pair[0] < pair[1]));

    let available = &lines[row + 1];
    let total = &lines[row + 2];
    let expected = [(15, 50), (3, 20), (8, 30), (12, 25)];
    let mut offset = 0;
    for (available_beds, total_beds) in expected {
        let needle = format!("Available: {available_beds}");
        let at = available[offset..]
            .find(&needle)
            .unwrap_or_else(|| panic!("{needle} missing"))
            + offset;
        assert!(total[at..].contains(&format!("Total: {total_beds}")));
        offset = at + needle.len();
    }
}

#[test]
fn inventory_view_lists_stock() {
    let mut app = app();
    app.select_view(View::Inventory);
    let lines = render(&mut app);

    let title = line_of(&lines, "Inventory Management");
    assert!(lines[title].contains("Current Stock Levels"));
    let header = line_of(&lines, "Unit");
    assert!(lines[header].contains("Item"));
    assert!(lines[header].contains("Current Stock"));
    assert!(header > title);

    let expected = [
        ("Paracetamol", "1500", "tablets"),
        ("Bandages", "500", "rolls"),
        ("Syringes", "2000", "pieces"),
        ("Surgical Masks", "5000", "pieces"),
    ];
    let mut previous = header;
    for (item, stock, unit) in expected {
        let row = line_of(&lines, item);
        assert!(row > previous, "{item} out of order");
        assert!(lines[row].contains(stock));
        assert!(lines[row].contains(unit));
        previous = row;
    }
}

#[test]
fn search_text_does_not_filter_rows() {
    let mut app = app();
    let before = render(&mut app);

    app.set_search_text("xyz");
    app.select_view(View::Queue);
    let lines = render(&mut app);

    assert!(lines[1].contains("xyz"));
    assert_queue_rows(&lines);
    let body = line_of(&lines, "Current Queue Status");
    assert_eq!(lines[body..], before[body..]);

    // a string that would match exactly one row if it filtered
    app.set_search_text("Jane");
    let lines = render(&mut app);
    assert_queue_rows(&lines);
    assert!(lines[line_of(&lines, "Current Queue Status")].contains("3 patients waiting"));
}

fn render_at(app: &mut App, width: u16) -> Vec<String> {
    let backend = TestBackend::new(width, HEIGHT);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    buffer_lines(terminal.backend().buffer())
}

#[test]
fn medium_terminal_shows_two_card_columns() {
    let mut app = app();
    app.select_view(View::Beds);
    let lines = render_at(&mut app, 80);

    let top = line_of(&lines, "General Ward");
    assert!(lines[top].contains("ICU Ward"));
    assert!(lines[top].find("General Ward") < lines[top].find("ICU Ward"));
    assert!(!lines[top].contains("Emergency Ward"));

    let bottom = line_of(&lines, "Emergency Ward");
    assert!(bottom > top);
    assert!(lines[bottom].contains("Pediatric Ward"));
    assert!(lines[bottom + 1].contains("Available: 8"));
    assert!(lines[bottom + 2].contains("Total: 25"));
}

#[test]
fn narrow_terminal_stacks_ward_cards() {
    let mut app = app();
    app.select_view(View::Beds);
    let lines = render_at(&mut app, 40);

    let general = line_of(&lines, "General Ward");
    let icu = line_of(&lines, "ICU Ward");
    assert!(icu > general);
}

#[test]
fn help_overlay_names_active_view() {
    let mut app = app();
    app.select_view(View::Inventory);
    app.help_open = true;
    let lines = render(&mut app);
    line_of(&lines, "Active view: Inventory");
}
