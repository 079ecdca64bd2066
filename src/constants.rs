//! Constants used throughout the application
//!
//! This module centralizes UI text, defaults and layout limits.

// Component defaults
pub const DEFAULT_GRID_EMPTY_MESSAGE: &str = "No data available";
pub const DEFAULT_ID_PLACEHOLDER: &str = "Enter ID";
pub const DEFAULT_TASKS_TITLE: &str = "Daily Tasks";
pub const DEFAULT_TASKS_EMPTY_MESSAGE: &str = "No tasks available";
pub const DEFAULT_TASK_PLACEHOLDER: &str = "Enter task name";
pub const DEFAULT_ADD_BUTTON_TEXT: &str = "Add Task";
pub const LOADING_TEXT: &str = "Loading...";

// Accessible labels
pub const LABEL_TASKS_GRID: &str = "Daily tasks grid";
pub const LABEL_TASK_ACTIONS: &str = "Task actions";
pub const LABEL_ADD_TASK: &str = "Add new task";

// Tracker limits
/// Default number of days shown in the tracker
pub const DAYS_BACK_DEFAULT: u32 = 5;
/// Upper bound on the tracker window
pub const DAYS_BACK_MAX: u32 = 366;
/// Default task name column width, in percent
pub const ID_COLUMN_WIDTH_DEFAULT: u8 = 30;
const _: () = assert!(ID_COLUMN_WIDTH_DEFAULT >= 1 && ID_COLUMN_WIDTH_DEFAULT <= 99);

// Status bar hints
pub const HINT_TASKS: &str = "←↑↓→: move • Enter/Space: toggle/edit • o: open • a: add • Tab: focus • ?: help • q: quit";
pub const HINT_GRID: &str = "Tab: header/rows • ←→: column • ↑↓: row • Enter: sort/open • ?: help • q: quit";
pub const HINT_EDITING: &str = "Editing task name • Enter/Esc: done";

// Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";
pub const DIALOG_TITLE_HELP: &str = "❓ Help - Press 'Esc' or '?' to close";
