//! Daily task tracker: a [`DateGrid`] over a rolling window of days with an
//! "add task" button row.
//!
//! Task rows are owned by the caller and handed in through
//! [`DailyTasks::set_tasks`]. Every change is reported as an [`Action`].

use crate::config::TrackerConfig;
use crate::constants::{
    DAYS_BACK_DEFAULT, DAYS_BACK_MAX, DEFAULT_ADD_BUTTON_TEXT, DEFAULT_TASKS_EMPTY_MESSAGE, DEFAULT_TASKS_TITLE,
    DEFAULT_TASK_PLACEHOLDER, LABEL_ADD_TASK, LABEL_TASKS_GRID, LABEL_TASK_ACTIONS,
};
use crate::error::UiError;
use crate::icons::IconService;
use crate::ui::components::button::{Button, ButtonVariant};
use crate::ui::components::button_group::{ButtonGroup, ButtonGroupAlignment};
use crate::ui::components::date_grid::{DateGrid, DateGridEvent, DateGridRow};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crate::utils::datetime::{self, date_window};
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::fmt;

/// Progress of a task on one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Blocked,
}

/// Number of distinct task states
pub const TASK_STATUS_COUNT: u8 = 4;

impl TaskStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "not started",
            TaskStatus::InProgress => "in progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Blocked => "blocked",
        }
    }
}

impl From<TaskStatus> for u8 {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::NotStarted => 0,
            TaskStatus::InProgress => 1,
            TaskStatus::Completed => 2,
            TaskStatus::Blocked => 3,
        }
    }
}

impl TryFrom<u8> for TaskStatus {
    type Error = UiError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TaskStatus::NotStarted),
            1 => Ok(TaskStatus::InProgress),
            2 => Ok(TaskStatus::Completed),
            3 => Ok(TaskStatus::Blocked),
            other => Err(UiError::InvalidStatus(other)),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which part of the tracker receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TasksFocus {
    #[default]
    Grid,
    Buttons,
}

pub struct DailyTasks {
    pub title: String,
    pub aria_label: String,
    days_back: u32,
    today: NaiveDate,
    grid: DateGrid,
    buttons: ButtonGroup,
    focus: TasksFocus,
}

impl DailyTasks {
    /// A tracker with default texts and a window ending at `today`
    pub fn new(today: NaiveDate) -> Self {
        let mut grid = DateGrid::with_default_id_width();
        grid.id_placeholder = DEFAULT_TASK_PLACEHOLDER.to_string();
        grid.empty_message = DEFAULT_TASKS_EMPTY_MESSAGE.to_string();
        grid.show_delete_button = true;
        grid.bubble_states = TASK_STATUS_COUNT;
        grid.aria_label = Some(LABEL_TASKS_GRID.to_string());

        let mut tasks = Self {
            title: DEFAULT_TASKS_TITLE.to_string(),
            aria_label: DEFAULT_TASKS_TITLE.to_string(),
            days_back: DAYS_BACK_DEFAULT,
            today,
            grid,
            buttons: Self::add_buttons(DEFAULT_ADD_BUTTON_TEXT),
            focus: TasksFocus::default(),
        };
        tasks.refresh_dates();
        tasks
    }

    /// Build the tracker from configuration
    pub fn from_config(config: &TrackerConfig, icons: IconService, today: NaiveDate) -> Result<Self, UiError> {
        if !datetime::is_valid_format(&config.date_format) {
            return Err(UiError::InvalidDateFormat(config.date_format.clone()));
        }
        if !(1..=DAYS_BACK_MAX).contains(&config.days_back) {
            return Err(UiError::InvalidDaysBack(config.days_back));
        }

        let mut tasks = Self::new(today);
        tasks.title = config.header_title.clone();
        tasks.aria_label = config.header_title.clone();
        tasks.days_back = config.days_back;
        tasks.buttons = Self::add_buttons(&config.add_button_text);
        tasks.grid.empty_message = config.empty_message.clone();
        tasks.grid.id_placeholder = config.task_placeholder.clone();
        tasks.grid.show_delete_button = config.show_delete_button;
        tasks.grid.date_format = config.date_format.clone();
        tasks.grid.set_id_column_width(config.id_column_width)?;
        tasks.grid.icons = icons;
        tasks.refresh_dates();
        Ok(tasks)
    }

    fn add_buttons(text: &str) -> ButtonGroup {
        ButtonGroup::new(vec![Button::new(text, Action::AddTask)
            .variant(ButtonVariant::Primary)
            .aria_label(LABEL_ADD_TASK)])
        .alignment(ButtonGroupAlignment::Right)
        .aria_label(LABEL_TASK_ACTIONS)
    }

    /// Replace the task rows from the owning state
    pub fn set_tasks(&mut self, tasks: Vec<DateGridRow>) {
        self.grid.set_rows(tasks);
    }

    pub fn tasks(&self) -> &[DateGridRow] {
        self.grid.rows()
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.grid.loading = loading;
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.grid.icons = icons;
    }

    pub fn days_back(&self) -> u32 {
        self.days_back
    }

    /// Resize the window, clamped to `1..=DAYS_BACK_MAX` days
    pub fn set_days_back(&mut self, days_back: u32) {
        self.days_back = days_back.clamp(1, DAYS_BACK_MAX);
        self.refresh_dates();
    }

    /// Move the window so that it ends at `today`
    pub fn set_today(&mut self, today: NaiveDate) {
        if today != self.today {
            self.today = today;
            self.refresh_dates();
        }
    }

    fn refresh_dates(&mut self) {
        self.grid.set_dates(date_window(self.days_back, self.today));
    }

    /// Date keys currently shown, oldest first
    pub fn dates(&self) -> &[String] {
        self.grid.dates()
    }

    pub fn focus(&self) -> TasksFocus {
        self.focus
    }

    pub fn grid(&self) -> &DateGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut DateGrid {
        &mut self.grid
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            TasksFocus::Grid => {
                self.buttons.on_focus();
                TasksFocus::Buttons
            }
            TasksFocus::Buttons => {
                self.buttons.on_blur();
                TasksFocus::Grid
            }
        };
    }

    /// Translate a grid event into an application action
    fn map_event(&self, event: DateGridEvent) -> Action {
        match event {
            DateGridEvent::IdChanged { row, id } => Action::TaskNameChanged { index: row, name: id },
            DateGridEvent::BubbleChanged { row, date, state } => match TaskStatus::try_from(state) {
                Ok(status) => Action::StatusChanged {
                    index: row,
                    date,
                    status,
                },
                Err(e) => {
                    log::warn!("DailyTasks: ignoring bubble change: {}", e);
                    Action::None
                }
            },
            DateGridEvent::RowDeleted(row) => Action::DeleteTask(row),
            DateGridEvent::RowClicked(row) => Action::TaskClicked(row),
            DateGridEvent::None => Action::None,
        }
    }
}

impl Component for DailyTasks {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.grid.is_editing() {
            let event = self.grid.handle_key(key);
            return self.map_event(event);
        }

        match (self.focus, key.code) {
            (_, KeyCode::Tab) | (_, KeyCode::BackTab) => {
                self.toggle_focus();
                Action::None
            }
            (_, KeyCode::Char('a')) => self.buttons.buttons.first().map(Button::activate).unwrap_or(Action::None),
            (TasksFocus::Grid, _) => {
                let event = self.grid.handle_key(key);
                self.map_event(event)
            }
            (TasksFocus::Buttons, _) => self.buttons.handle_key_events(key),
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::tracker_layout(rect);

        let title = Line::from(vec![
            Span::raw(format!("{} ", self.grid.icons.tasks_title())),
            Span::styled(
                self.title.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]);
        f.render_widget(Paragraph::new(title), areas[0]);

        self.grid.render(f, areas[1]);
        self.buttons.render(f, areas[2]);
    }

    fn is_capturing_input(&self) -> bool {
        self.grid.is_editing()
    }

    fn on_blur(&mut self) {
        self.grid.finish_editing();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_values() {
        for value in 0..TASK_STATUS_COUNT {
            let status = TaskStatus::try_from(value).unwrap();
            assert_eq!(u8::from(status), value);
        }
        assert_eq!(TaskStatus::try_from(4), Err(UiError::InvalidStatus(4)));
    }

    #[test]
    fn test_default_window() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let tasks = DailyTasks::new(today);
        assert_eq!(
            tasks.dates(),
            ["2024-02-27", "2024-02-28", "2024-02-29", "2024-03-01", "2024-03-02"]
        );
    }
}
