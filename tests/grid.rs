use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use std::collections::HashMap;
use tasktrail::error::UiError;
use tasktrail::ui::components::grid::{
    CellValue, Grid, GridColumn, GridFocus, SortDirection, SortItem,
};
use tasktrail::ui::core::{Action, Component};

type Row = HashMap<String, CellValue>;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn person(name: &str, age: i64) -> Row {
    HashMap::from([
        ("name".to_string(), CellValue::from(name)),
        ("age".to_string(), CellValue::from(age)),
    ])
}

fn grid() -> Grid<Row> {
    let mut grid = Grid::new(vec![
        GridColumn::new("name", "Name").sortable(true),
        GridColumn::new("age", "Age").sortable(true),
        GridColumn::new("notes", "Notes"),
    ]);
    grid.set_rows(vec![person("Carol", 41), person("Alice", 29), person("Bob", 35)]);
    grid
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_header_activation_reports_next_model() {
    let mut grid = grid();
    grid.handle_key_events(key(KeyCode::Tab));
    assert_eq!(grid.focus(), GridFocus::Header);

    grid.handle_key_events(key(KeyCode::Right));
    let action = grid.handle_key_events(key(KeyCode::Enter));
    assert_eq!(
        action,
        Action::SortModelChanged(vec![SortItem::new("age", SortDirection::Asc)])
    );

    // Controlled: nothing changes until the owner passes the model back
    assert!(grid.sort_model().is_empty());
    assert_eq!(grid.display_order(), [0, 1, 2]);
}

#[test]
fn test_unsortable_and_unlistened_headers_are_inert() {
    let mut grid = grid();
    assert_eq!(grid.activate_header(2), Action::None);

    grid.sortable_model = false;
    assert_eq!(grid.activate_header(0), Action::None);
}

#[test]
fn test_row_click_reports_original_index() {
    let mut grid = grid();
    grid.set_sort_model(vec![SortItem::new("age", SortDirection::Asc)]);
    assert_eq!(grid.display_order(), [1, 2, 0]);

    assert_eq!(grid.handle_key_events(key(KeyCode::Enter)), Action::RowClicked(1));
    grid.handle_key_events(key(KeyCode::Down));
    assert_eq!(grid.handle_key_events(key(KeyCode::Enter)), Action::RowClicked(2));

    grid.clickable_rows = false;
    assert_eq!(grid.handle_key_events(key(KeyCode::Enter)), Action::None);
}

#[test]
fn test_up_from_first_row_moves_to_header() {
    let mut grid = grid();
    grid.handle_key_events(key(KeyCode::Up));
    assert_eq!(grid.focus(), GridFocus::Header);
    grid.handle_key_events(key(KeyCode::Down));
    assert_eq!(grid.focus(), GridFocus::Body);
}

#[test]
fn test_first_column_width_bounds() {
    assert!(grid().first_column_width(40).is_ok());
    assert!(matches!(grid().first_column_width(0), Err(UiError::InvalidColumnWidth(0))));
}

#[test]
fn test_render_headers_and_sort_indicator() {
    let mut grid = grid();
    grid.set_sort_model(vec![SortItem::new("name", SortDirection::Desc)]);

    let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
    terminal.draw(|f| grid.render(f, f.area())).unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("Name"));
    assert!(text.contains("Age"));
    assert!(text.contains("Carol"));
    assert!(text.contains(grid.icons.sort_descending()));
}

#[test]
fn test_render_empty_message() {
    let mut grid: Grid<Row> = Grid::new(vec![GridColumn::new("name", "Name")]);
    let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
    terminal.draw(|f| grid.render(f, f.area())).unwrap();
    assert!(buffer_text(&terminal).contains("No data available"));
}
