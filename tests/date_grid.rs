use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use tasktrail::ui::components::date_grid::{DateGrid, DateGridColumn, DateGridEvent, DateGridRow};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn dates() -> Vec<String> {
    vec!["2024-03-01".to_string(), "2024-03-02".to_string()]
}

fn grid() -> DateGrid {
    let mut grid = DateGrid::new();
    grid.set_dates(dates());
    grid.set_rows(vec![
        DateGridRow::new("Exercise").with_status("2024-03-01", 2),
        DateGridRow::new("Read"),
    ]);
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
fn test_columns_follow_props() {
    let mut grid = grid();
    assert_eq!(
        grid.columns(),
        vec![DateGridColumn::Id, DateGridColumn::Date(0), DateGridColumn::Date(1)]
    );

    grid.show_delete_button = true;
    grid.show_id_header = false;
    assert_eq!(
        grid.columns(),
        vec![DateGridColumn::Date(0), DateGridColumn::Date(1), DateGridColumn::Delete]
    );
}

#[test]
fn test_bubble_activation_reports_next_state() {
    let mut grid = grid();
    grid.handle_key(key(KeyCode::Right));
    assert_eq!(
        grid.handle_key(key(KeyCode::Char(' '))),
        DateGridEvent::BubbleChanged {
            row: 0,
            date: "2024-03-01".to_string(),
            state: 0,
        }
    );

    grid.handle_key(key(KeyCode::Down));
    assert_eq!(
        grid.handle_key(key(KeyCode::Enter)),
        DateGridEvent::BubbleChanged {
            row: 1,
            date: "2024-03-01".to_string(),
            state: 1,
        }
    );
}

#[test]
fn test_bubble_state_is_controlled() {
    let mut grid = grid();
    grid.set_cursor(1, 2);
    let first = grid.activate();
    let second = grid.activate();
    // The stored status did not change, so the same next state is reported
    assert_eq!(first, second);
}

#[test]
fn test_editing_id_cell() {
    let mut grid = grid();
    assert_eq!(grid.handle_key(key(KeyCode::Enter)), DateGridEvent::None);
    assert!(grid.is_editing());

    assert_eq!(
        grid.handle_key(key(KeyCode::Char('!'))),
        DateGridEvent::IdChanged {
            row: 0,
            id: "Exercise!".to_string(),
        }
    );

    // Arrow keys stay inside the editor
    grid.handle_key(key(KeyCode::Down));
    assert_eq!(grid.cursor(), (0, 0));

    grid.handle_key(key(KeyCode::Esc));
    assert!(!grid.is_editing());
}

#[test]
fn test_delete_and_row_click() {
    let mut grid = grid();
    grid.show_delete_button = true;
    grid.set_cursor(1, 3);
    assert_eq!(grid.handle_key(key(KeyCode::Enter)), DateGridEvent::RowDeleted(1));
    assert_eq!(grid.handle_key(key(KeyCode::Char('o'))), DateGridEvent::RowClicked(1));

    grid.clickable_rows = false;
    assert_eq!(grid.handle_key(key(KeyCode::Char('o'))), DateGridEvent::None);
}

#[test]
fn test_cursor_clamps_when_rows_shrink() {
    let mut grid = grid();
    grid.set_cursor(1, 2);
    grid.set_rows(vec![DateGridRow::new("Only")]);
    assert_eq!(grid.cursor(), (0, 2));

    grid.set_rows(Vec::new());
    assert_eq!(grid.activate(), DateGridEvent::None);
}

#[test]
fn test_id_column_width_validation() {
    let mut grid = grid();
    assert!(grid.set_id_column_width(25).is_ok());
    assert_eq!(grid.id_column_width(), Some(25));
    assert!(grid.set_id_column_width(0).is_err());
}

#[test]
fn test_render_formats_headers() {
    let mut grid = grid();
    let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
    terminal.draw(|f| grid.render(f, f.area())).unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("Mar 1"));
    assert!(text.contains("Mar 2"));
    assert!(text.contains("Exercise"));
}

#[test]
fn test_render_unparsable_date_verbatim_and_empty_message() {
    let mut grid = DateGrid::new();
    grid.set_dates(vec!["someday".to_string()]);
    let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
    terminal.draw(|f| grid.render(f, f.area())).unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("someday"));
    assert!(text.contains("No data available"));
}
