use crate::config::Config;
use crate::constants::{HINT_EDITING, HINT_GRID, HINT_TASKS};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::grid::{
    CellParams, CellValue, ColumnWidth, Grid, GridAlignment, GridColumn, GridRow, SortModel,
};
use crate::ui::components::{DailyTasks, DateGridRow, Overlay, TaskStatus};
use crate::ui::core::{Action, Component, EventType, View};
use crate::ui::layout::LayoutManager;
use crate::utils::datetime;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// A row of the users grid
#[derive(Debug, Clone, PartialEq)]
pub struct UserRow {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub status: String,
    pub age: u32,
}

impl UserRow {
    pub fn new(id: u32, name: &str, email: &str, status: &str, age: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            status: status.to_string(),
            age,
        }
    }
}

impl GridRow for UserRow {
    fn cell(&self, field: &str) -> CellValue {
        match field {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "email" => self.email.as_str().into(),
            "status" => self.status.as_str().into(),
            "age" => self.age.into(),
            _ => CellValue::Empty,
        }
    }
}

/// Sample users shown in the grid view
pub fn demo_users() -> Vec<UserRow> {
    vec![
        UserRow::new(1, "John Doe", "john@example.com", "Active", 30),
        UserRow::new(2, "Jane Smith", "jane@example.com", "Inactive", 25),
        UserRow::new(3, "Bob Johnson", "bob@example.com", "Active", 35),
    ]
}

fn user_columns() -> Vec<GridColumn<UserRow>> {
    vec![
        GridColumn::new("name", "Name").sortable(true).width(ColumnWidth::Large),
        GridColumn::new("email", "Email").sortable(true),
        GridColumn::new("status", "Status")
            .sortable(true)
            .width(ColumnWidth::Medium)
            .render_cell(|params: &CellParams<'_, UserRow>| {
                let color = match params.row.status.as_str() {
                    "Active" => Color::Green,
                    "Inactive" => Color::DarkGray,
                    _ => Color::Yellow,
                };
                Line::from(Span::styled(params.value.to_string(), Style::default().fg(color)))
            }),
        GridColumn::new("age", "Age")
            .sortable(true)
            .width(ColumnWidth::Small)
            .align(GridAlignment::Right),
        GridColumn::new("actions", "Actions")
            .width(ColumnWidth::Fit)
            .align(GridAlignment::Center)
            .render_cell(|_: &CellParams<'_, UserRow>| {
                Line::from(vec![
                    Span::styled("[e] Edit", Style::default().fg(Color::Blue)),
                    Span::raw(" "),
                    Span::styled("[d] Delete", Style::default().fg(Color::Red)),
                ])
            }),
    ]
}

fn users_title(icons: &IconService) -> String {
    format!("{} {}", icons.grid_title(), View::Grid.title())
}

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub view: View,
    pub tasks: Vec<DateGridRow>,
    pub users: Vec<UserRow>,
    pub users_sort_model: SortModel,
    pub show_help: bool,
    pub show_logs: bool,
    pub info_message: Option<String>,
}

impl AppState {
    /// Append a task with an empty name and no statuses
    pub fn add_task(&mut self) -> usize {
        self.tasks.push(DateGridRow::default());
        self.tasks.len() - 1
    }

    pub fn rename_task(&mut self, index: usize, name: String) -> bool {
        match self.tasks.get_mut(index) {
            Some(task) => {
                task.id = name;
                true
            }
            None => false,
        }
    }

    pub fn set_status(&mut self, index: usize, date: String, status: TaskStatus) -> bool {
        match self.tasks.get_mut(index) {
            Some(task) => {
                task.statuses.insert(date, u8::from(status));
                true
            }
            None => false,
        }
    }

    pub fn delete_task(&mut self, index: usize) -> Option<DateGridRow> {
        (index < self.tasks.len()).then(|| self.tasks.remove(index))
    }

    pub fn delete_user(&mut self, index: usize) -> Option<UserRow> {
        (index < self.users.len()).then(|| self.users.remove(index))
    }

    /// Clear any transient messages
    pub fn clear_messages(&mut self) {
        self.info_message = None;
    }
}

pub struct AppComponent {
    // Component composition
    daily_tasks: DailyTasks,
    users_grid: Grid<UserRow>,
    overlay: Option<Overlay>,

    // Application state
    state: AppState,

    // Services
    logger: Logger,
    icons: IconService,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config, logger: Logger) -> anyhow::Result<Self> {
        let icons = IconService::new(config.ui.icon_theme);
        let daily_tasks = DailyTasks::from_config(&config.tracker, icons.clone(), datetime::today())?;

        let mut users_grid = Grid::new(user_columns()).title(users_title(&icons));
        users_grid.icons = icons.clone();

        let view = match config.ui.default_view.as_str() {
            "grid" => View::Grid,
            _ => View::Tasks,
        };

        let state = AppState {
            view,
            tasks: config.tracker.initial_tasks.iter().map(DateGridRow::new).collect(),
            users: demo_users(),
            ..Default::default()
        };

        let mut app = Self {
            daily_tasks,
            users_grid,
            overlay: None,
            state,
            logger,
            icons,
            should_quit: false,
        };
        app.sync_component_data();
        app.logger.log(format!(
            "AppComponent: started in {} view with {} tasks",
            app.state.view.title(),
            app.state.tasks.len()
        ));
        Ok(app)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn daily_tasks(&self) -> &DailyTasks {
        &self.daily_tasks
    }

    pub fn users_grid(&self) -> &Grid<UserRow> {
        &self.users_grid
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Push the owned state back into the components
    fn sync_component_data(&mut self) {
        self.daily_tasks.set_tasks(self.state.tasks.clone());
        self.users_grid.set_rows(self.state.users.clone());
        self.users_grid.set_sort_model(self.state.users_sort_model.clone());
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('1') => Action::SwitchView(View::Tasks),
            KeyCode::Char('2') => Action::SwitchView(View::Grid),
            KeyCode::Char('?') => Action::ShowHelp(true),
            KeyCode::Char('G') => Action::ShowLogs(true),
            KeyCode::Char('t') => Action::CycleIconTheme,
            KeyCode::Char('e') if self.state.view == View::Grid => {
                self.users_grid.selected_row().map(Action::EditUser).unwrap_or(Action::None)
            }
            KeyCode::Char('d') if self.state.view == View::Grid => {
                self.users_grid.selected_row().map(Action::DeleteUser).unwrap_or(Action::None)
            }
            _ => Action::None,
        }
    }

    /// Route a key to the overlay, the active view, then the global shortcuts
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if let Some(overlay) = self.overlay.as_mut() {
            return overlay.handle_key_events(key);
        }

        let capturing = self.is_capturing_input();
        let action = match self.state.view {
            View::Tasks => self.daily_tasks.handle_key_events(key),
            View::Grid => self.users_grid.handle_key_events(key),
        };

        if action != Action::None || capturing || self.is_capturing_input() {
            action
        } else {
            self.handle_global_key(key)
        }
    }

    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => self.route_key(key),
            EventType::Tick => {
                // Keep the window ending at today across midnight
                self.daily_tasks.set_today(datetime::today());
                Action::None
            }
            EventType::Resize(_, _) | EventType::Other => Action::None,
        };

        let action = self.update(action);
        self.handle_app_action(action);
        Ok(())
    }

    /// Apply an action to the owned state
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::None => return Action::None,
            Action::Quit => {
                self.should_quit = true;
                return Action::None;
            }
            Action::SwitchView(view) => {
                if view != self.state.view {
                    match self.state.view {
                        View::Tasks => self.daily_tasks.on_blur(),
                        View::Grid => self.users_grid.on_blur(),
                    }
                    self.logger.log(format!("Navigation: switched to {} view", view.title()));
                    self.state.view = view;
                    self.state.clear_messages();
                }
            }
            Action::AddTask => {
                let index = self.state.add_task();
                self.logger.log(format!("Task: added row {}", index));
                self.sync_component_data();
                self.daily_tasks.grid_mut().set_cursor(index, 0);
            }
            Action::TaskNameChanged { index, name } => {
                if self.state.rename_task(index, name.clone()) {
                    log::debug!("Task: row {} renamed to '{}'", index, name);
                } else {
                    self.logger.log(format!("Task: cannot rename missing row {}", index));
                }
            }
            Action::StatusChanged { index, date, status } => {
                let name = self.state.tasks.get(index).map(|t| t.id.clone()).unwrap_or_default();
                if self.state.set_status(index, date.clone(), status) {
                    self.logger.log(format!("Task: '{}' on {} is now {}", name, date, status));
                } else {
                    self.logger.log(format!("Task: cannot set status of missing row {}", index));
                }
            }
            Action::DeleteTask(index) => match self.state.delete_task(index) {
                Some(task) => {
                    self.logger.log(format!("Task: deleted '{}'", task.id));
                    self.state.info_message = Some(format!("Deleted task '{}'", task.id));
                }
                None => self.logger.log(format!("Task: cannot delete missing row {}", index)),
            },
            Action::TaskClicked(index) => {
                if let Some(task) = self.state.tasks.get(index) {
                    let done = task
                        .statuses
                        .values()
                        .filter(|&&s| s == u8::from(TaskStatus::Completed))
                        .count();
                    self.logger.log(format!("Task: opened '{}'", task.id));
                    self.state.info_message = Some(format!(
                        "{} {}: completed on {} day(s)",
                        self.icons.info(),
                        task.id,
                        done
                    ));
                }
            }
            Action::SortModelChanged(model) => {
                let description = model
                    .iter()
                    .map(|item| format!("{} {}", item.field, item.sort.aria_sort()))
                    .collect::<Vec<_>>()
                    .join(", ");
                self.logger.log(format!("Grid: sort model is now [{}]", description));
                self.state.users_sort_model = model;
            }
            Action::RowClicked(index) => {
                if let Some(user) = self.state.users.get(index) {
                    self.logger.log(format!("Grid: row clicked '{}'", user.name));
                    self.state.info_message = Some(format!("{} {} <{}>", self.icons.info(), user.name, user.email));
                }
            }
            Action::EditUser(index) => {
                if let Some(user) = self.state.users.get(index) {
                    self.logger.log(format!("Grid: edit user {} '{}'", user.id, user.name));
                    self.state.info_message = Some(format!("Edit user: {}", user.name));
                }
            }
            Action::DeleteUser(index) => {
                if let Some(user) = self.state.delete_user(index) {
                    self.logger.log(format!("Grid: deleted user {} '{}'", user.id, user.name));
                    self.state.info_message = Some(format!("Deleted user: {}", user.name));
                }
            }
            Action::ShowHelp(show) => {
                self.state.show_help = show;
                self.state.show_logs = false;
                self.overlay = show.then(Overlay::help);
            }
            Action::ShowLogs(show) => {
                self.logger.log(format!("Logs panel {}", if show { "opened" } else { "closed" }));
                self.state.show_logs = show;
                self.state.show_help = false;
                self.overlay = show.then(|| Overlay::logs(self.logger.get_logs()));
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.daily_tasks.set_icons(self.icons.clone());
                self.users_grid.icons = self.icons.clone();
                self.users_grid.title = Some(users_title(&self.icons));
                self.logger.log(format!("UI: icon theme is now {:?}", self.icons.theme()));
            }
        }

        self.sync_component_data();
        Action::None
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (key, view) in [("1", View::Tasks), ("2", View::Grid)] {
            let style = if view == self.state.view {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!(" {} {} ", key, view.title()), style));
        }
        spans.push(Span::styled("│ ", Style::default().fg(Color::DarkGray)));

        let (text, color) = if self.is_capturing_input() {
            (HINT_EDITING.to_string(), Color::Yellow)
        } else if let Some(message) = &self.state.info_message {
            (message.clone(), Color::Green)
        } else {
            let hint = match self.state.view {
                View::Tasks => HINT_TASKS,
                View::Grid => HINT_GRID,
            };
            (hint.to_string(), Color::Gray)
        };
        spans.push(Span::styled(text, Style::default().fg(color)));

        f.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Left), area);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::main_layout(rect);

        match self.state.view {
            View::Tasks => self.daily_tasks.render(f, areas[0]),
            View::Grid => self.users_grid.render(f, areas[0]),
        }
        self.render_status_bar(f, areas[1]);

        if let Some(overlay) = self.overlay.as_mut() {
            overlay.render(f, rect);
        }
    }

    /// Whether the active view is taking raw text input
    fn is_capturing_input(&self) -> bool {
        match self.state.view {
            View::Tasks => self.daily_tasks.is_capturing_input(),
            View::Grid => self.users_grid.is_capturing_input(),
        }
    }
}
