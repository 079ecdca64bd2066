use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use tasktrail::config::TrackerConfig;
use tasktrail::constants::{DAYS_BACK_MAX, ID_COLUMN_WIDTH_DEFAULT};
use tasktrail::error::UiError;
use tasktrail::icons::IconService;
use tasktrail::ui::components::daily_tasks::{DailyTasks, TaskStatus, TasksFocus};
use tasktrail::ui::components::date_grid::DateGridRow;
use tasktrail::ui::components::Bubble;
use tasktrail::ui::core::{Action, Component};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
}

fn tracker() -> DailyTasks {
    let mut tasks = DailyTasks::new(today());
    tasks.set_tasks(vec![
        DateGridRow::new("Exercise").with_status("2024-01-02", 3),
        DateGridRow::new("Read"),
    ]);
    tasks
}

#[test]
fn test_status_values() {
    assert_eq!(TaskStatus::try_from(0), Ok(TaskStatus::NotStarted));
    assert_eq!(TaskStatus::try_from(1), Ok(TaskStatus::InProgress));
    assert_eq!(TaskStatus::try_from(2), Ok(TaskStatus::Completed));
    assert_eq!(TaskStatus::try_from(3), Ok(TaskStatus::Blocked));
    assert_eq!(TaskStatus::try_from(9), Err(UiError::InvalidStatus(9)));
}

#[test]
fn test_bubble_cycle_wraps() {
    let mut bubble = Bubble::with_states(0, 4);
    let seen: Vec<u8> = (0..5).map(|_| bubble.activate()).collect();
    assert_eq!(seen, vec![1, 2, 3, 0, 1]);

    let mut default_bubble = Bubble::new(2);
    assert_eq!(default_bubble.activate(), 0);
}

#[test]
fn test_window_spans_year_boundary() {
    let tasks = DailyTasks::new(today());
    assert_eq!(
        tasks.dates(),
        ["2023-12-29", "2023-12-30", "2023-12-31", "2024-01-01", "2024-01-02"]
    );
}

#[test]
fn test_window_rolls_with_today() {
    let mut tasks = DailyTasks::new(today());
    tasks.set_days_back(2);
    tasks.set_today(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
    assert_eq!(tasks.dates(), ["2024-01-02", "2024-01-03"]);
}

#[test]
fn test_window_size_is_clamped() {
    let mut tasks = DailyTasks::new(today());
    tasks.set_days_back(u32::MAX);
    assert_eq!(tasks.days_back(), DAYS_BACK_MAX);
    assert_eq!(tasks.dates().len(), DAYS_BACK_MAX as usize);
    assert_eq!(tasks.dates().last().map(String::as_str), Some("2024-01-02"));

    tasks.set_days_back(0);
    assert_eq!(tasks.dates(), ["2024-01-02"]);
}

#[test]
fn test_default_id_column_width() {
    let tasks = DailyTasks::new(today());
    assert_eq!(tasks.grid().id_column_width(), Some(ID_COLUMN_WIDTH_DEFAULT));
}

#[test]
fn test_status_change_action() {
    let mut tasks = tracker();
    // Today's column on the first task
    for _ in 0..5 {
        tasks.handle_key_events(key(KeyCode::Right));
    }

    let action = tasks.handle_key_events(key(KeyCode::Enter));
    assert_eq!(
        action,
        Action::StatusChanged {
            index: 0,
            date: "2024-01-02".to_string(),
            status: TaskStatus::NotStarted,
        }
    );
}

#[test]
fn test_rename_delete_and_click_actions() {
    let mut tasks = tracker();
    tasks.handle_key_events(key(KeyCode::Down));
    tasks.handle_key_events(key(KeyCode::Enter));
    assert!(tasks.is_capturing_input());

    assert_eq!(
        tasks.handle_key_events(key(KeyCode::Char('s'))),
        Action::TaskNameChanged {
            index: 1,
            name: "Reads".to_string(),
        }
    );
    // 'a' is text while editing
    assert!(matches!(
        tasks.handle_key_events(key(KeyCode::Char('a'))),
        Action::TaskNameChanged { .. }
    ));
    tasks.handle_key_events(key(KeyCode::Enter));
    assert!(!tasks.is_capturing_input());

    assert_eq!(tasks.handle_key_events(key(KeyCode::Char('o'))), Action::TaskClicked(1));

    for _ in 0..10 {
        tasks.handle_key_events(key(KeyCode::Right));
    }
    assert_eq!(tasks.handle_key_events(key(KeyCode::Enter)), Action::DeleteTask(1));
}

#[test]
fn test_add_task_button_and_shortcut() {
    let mut tasks = tracker();
    assert_eq!(tasks.handle_key_events(key(KeyCode::Char('a'))), Action::AddTask);

    tasks.handle_key_events(key(KeyCode::Tab));
    assert_eq!(tasks.focus(), TasksFocus::Buttons);
    assert_eq!(tasks.handle_key_events(key(KeyCode::Enter)), Action::AddTask);

    tasks.handle_key_events(key(KeyCode::Tab));
    assert_eq!(tasks.focus(), TasksFocus::Grid);
}

#[test]
fn test_from_config() {
    let config = TrackerConfig {
        days_back: 3,
        header_title: "Habits".to_string(),
        show_delete_button: false,
        id_column_width: 50,
        ..TrackerConfig::default()
    };
    let tasks = DailyTasks::from_config(&config, IconService::default(), today()).unwrap();
    assert_eq!(tasks.title, "Habits");
    assert_eq!(tasks.dates().len(), 3);
    assert_eq!(tasks.grid().id_column_width(), Some(50));
    assert!(!tasks.grid().show_delete_button);

    let bad_width = TrackerConfig {
        id_column_width: 0,
        ..TrackerConfig::default()
    };
    assert!(matches!(
        DailyTasks::from_config(&bad_width, IconService::default(), today()),
        Err(UiError::InvalidColumnWidth(0))
    ));

    let bad_format = TrackerConfig {
        date_format: "%Q".to_string(),
        ..TrackerConfig::default()
    };
    assert!(matches!(
        DailyTasks::from_config(&bad_format, IconService::default(), today()),
        Err(UiError::InvalidDateFormat(_))
    ));

    for days_back in [0, DAYS_BACK_MAX + 1, u32::MAX] {
        let bad_days = TrackerConfig {
            days_back,
            ..TrackerConfig::default()
        };
        assert_eq!(
            DailyTasks::from_config(&bad_days, IconService::default(), today()).err(),
            Some(UiError::InvalidDaysBack(days_back))
        );
    }
}

#[test]
fn test_render_title_button_and_placeholder() {
    let mut tasks = tracker();
    tasks.set_tasks(vec![DateGridRow::new("")]);

    let mut terminal = Terminal::new(TestBackend::new(100, 10)).unwrap();
    terminal.draw(|f| tasks.render(f, f.area())).unwrap();

    let text: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(text.contains("Daily Tasks"));
    assert!(text.contains("Add Task"));
    assert!(text.contains("Enter task name"));
    assert!(text.contains("Jan 2"));
}

#[test]
fn test_render_empty_message() {
    let mut tasks = DailyTasks::new(today());
    let mut terminal = Terminal::new(TestBackend::new(100, 10)).unwrap();
    terminal.draw(|f| tasks.render(f, f.area())).unwrap();

    let text: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(text.contains("No tasks available"));
}
