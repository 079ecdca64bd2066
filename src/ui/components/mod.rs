//! Reusable UI components

pub mod bubble;
pub mod button;
pub mod button_group;
pub mod daily_tasks;
pub mod date_grid;
pub mod grid;
pub mod input_field;
pub mod overlay;

pub use bubble::Bubble;
pub use button::{Button, ButtonKind, ButtonSize, ButtonVariant};
pub use button_group::{ButtonGroup, ButtonGroupAlignment, ButtonGroupDirection, ButtonGroupSpacing};
pub use daily_tasks::{DailyTasks, TaskStatus};
pub use date_grid::{DateGrid, DateGridEvent, DateGridRow};
pub use grid::{Grid, GridColumn};
pub use input_field::InputField;
pub use overlay::{Overlay, OverlayKind};
