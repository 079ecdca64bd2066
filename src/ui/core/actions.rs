use crate::ui::components::daily_tasks::TaskStatus;
use crate::ui::components::grid::SortModel;

/// Top-level views of the application shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Tasks,
    Grid,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Tasks => "Daily Tasks",
            View::Grid => "Users",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    SwitchView(View),

    // Daily task operations
    AddTask,
    TaskNameChanged {
        index: usize,
        name: String,
    },
    StatusChanged {
        index: usize,
        date: String,
        status: TaskStatus,
    },
    DeleteTask(usize),
    TaskClicked(usize),

    // Grid operations
    SortModelChanged(SortModel),
    RowClicked(usize),
    EditUser(usize),
    DeleteUser(usize),

    // UI operations
    ShowHelp(bool),
    ShowLogs(bool),
    CycleIconTheme,

    // App control
    Quit,
    None,
}
