//! Date-keyed grid: an editable id column followed by one bubble per date.
//!
//! Rows and their statuses belong to the caller. Key presses are translated
//! into [`DateGridEvent`]s; the grid only tracks its cursor and the
//! in-progress edit of an id cell.

use crate::constants::{DEFAULT_GRID_EMPTY_MESSAGE, DEFAULT_ID_PLACEHOLDER, ID_COLUMN_WIDTH_DEFAULT, LOADING_TEXT};
use crate::error::UiError;
use crate::icons::IconService;
use crate::ui::components::bubble::{Bubble, DEFAULT_BUBBLE_STATES};
use crate::ui::components::grid::{widths, GridVariant};
use crate::ui::components::input_field::InputField;
use crate::ui::layout::LayoutManager;
use crate::utils::datetime::{format_header_date, HEADER_DATE_FORMAT};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
    Frame,
};
use std::collections::BTreeMap;
use unicode_width::UnicodeWidthStr;

/// Width of the id column when no percentage is configured
const ID_COLUMN_DEFAULT_WIDTH: u16 = 24;
const COLUMN_SPACING: u16 = 1;

/// A row keyed by id, holding a bubble state per date key
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateGridRow {
    pub id: String,
    pub statuses: BTreeMap<String, u8>,
}

impl DateGridRow {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            statuses: BTreeMap::new(),
        }
    }

    pub fn with_status(mut self, date: impl Into<String>, state: u8) -> Self {
        self.statuses.insert(date.into(), state);
        self
    }

    /// Stored state for a date; unset dates are state 0
    pub fn status(&self, date: &str) -> u8 {
        self.statuses.get(date).copied().unwrap_or(0)
    }
}

/// What a key press asked the owner of the rows to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateGridEvent {
    IdChanged { row: usize, id: String },
    BubbleChanged { row: usize, date: String, state: u8 },
    RowClicked(usize),
    RowDeleted(usize),
    None,
}

/// Kinds of column, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateGridColumn {
    Id,
    Date(usize),
    Delete,
}

pub struct DateGrid {
    rows: Vec<DateGridRow>,
    dates: Vec<String>,
    pub show_id_header: bool,
    pub id_placeholder: String,
    pub empty_message: String,
    pub variant: GridVariant,
    pub loading: bool,
    id_column_width: Option<u8>,
    pub date_format: String,
    pub bubble_states: u8,
    pub show_delete_button: bool,
    pub clickable_rows: bool,
    pub aria_label: Option<String>,
    pub icons: IconService,
    cursor_row: usize,
    cursor_col: usize,
    editor: Option<InputField>,
    table_state: TableState,
}

impl Default for DateGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl DateGrid {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            dates: Vec::new(),
            show_id_header: true,
            id_placeholder: DEFAULT_ID_PLACEHOLDER.to_string(),
            empty_message: DEFAULT_GRID_EMPTY_MESSAGE.to_string(),
            variant: GridVariant::Bordered,
            loading: false,
            id_column_width: None,
            date_format: HEADER_DATE_FORMAT.to_string(),
            bubble_states: DEFAULT_BUBBLE_STATES,
            show_delete_button: false,
            clickable_rows: true,
            aria_label: None,
            icons: IconService::default(),
            cursor_row: 0,
            cursor_col: 0,
            editor: None,
            table_state: TableState::default(),
        }
    }

    /// Grid whose id column takes the default share of the width
    pub fn with_default_id_width() -> Self {
        Self {
            id_column_width: Some(ID_COLUMN_WIDTH_DEFAULT),
            ..Self::new()
        }
    }

    /// Give the id column a percentage of the grid width
    pub fn set_id_column_width(&mut self, percent: u8) -> Result<(), UiError> {
        self.id_column_width = Some(widths::first_column_percent(percent)?);
        Ok(())
    }

    pub fn id_column_width(&self) -> Option<u8> {
        self.id_column_width
    }

    /// Replace the rows from the owning state
    pub fn set_rows(&mut self, rows: Vec<DateGridRow>) {
        self.rows = rows;
        self.clamp_cursor();
        if let Some(editor) = self.editor.as_mut() {
            match self.rows.get(self.cursor_row) {
                Some(row) => editor.set_value(row.id.clone()),
                None => self.editor = None,
            }
        }
    }

    pub fn set_dates(&mut self, dates: Vec<String>) {
        self.dates = dates;
        self.clamp_cursor();
    }

    pub fn rows(&self) -> &[DateGridRow] {
        &self.rows
    }

    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    /// Column layout, left to right
    pub fn columns(&self) -> Vec<DateGridColumn> {
        let mut columns = Vec::with_capacity(self.dates.len() + 2);
        if self.show_id_header {
            columns.push(DateGridColumn::Id);
        }
        columns.extend((0..self.dates.len()).map(DateGridColumn::Date));
        if self.show_delete_button {
            columns.push(DateGridColumn::Delete);
        }
        columns
    }

    /// Cursor position as (row, column index)
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    pub fn set_cursor(&mut self, row: usize, col: usize) {
        self.cursor_row = row;
        self.cursor_col = col;
        self.clamp_cursor();
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    /// Stop editing the id cell
    pub fn finish_editing(&mut self) {
        self.editor = None;
    }

    fn clamp_cursor(&mut self) {
        self.cursor_row = self.cursor_row.min(self.rows.len().saturating_sub(1));
        self.cursor_col = self.cursor_col.min(self.columns().len().saturating_sub(1));
    }

    fn current_column(&self) -> Option<DateGridColumn> {
        self.columns().get(self.cursor_col).copied()
    }

    /// Activate the cell under the cursor
    pub fn activate(&mut self) -> DateGridEvent {
        let Some(row) = self.rows.get(self.cursor_row) else {
            return DateGridEvent::None;
        };

        match self.current_column() {
            Some(DateGridColumn::Id) => {
                let mut editor = InputField::new(row.id.clone()).placeholder(self.id_placeholder.clone());
                editor.move_to_end();
                self.editor = Some(editor);
                DateGridEvent::None
            }
            Some(DateGridColumn::Date(index)) => {
                let date = self.dates[index].clone();
                let mut bubble = Bubble::with_states(row.status(&date), self.bubble_states);
                DateGridEvent::BubbleChanged {
                    row: self.cursor_row,
                    date,
                    state: bubble.activate(),
                }
            }
            Some(DateGridColumn::Delete) => DateGridEvent::RowDeleted(self.cursor_row),
            None => DateGridEvent::None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DateGridEvent {
        if let Some(editor) = self.editor.as_mut() {
            return match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Tab => {
                    self.editor = None;
                    DateGridEvent::None
                }
                _ => match editor.handle_key(key) {
                    Some(id) => DateGridEvent::IdChanged {
                        row: self.cursor_row,
                        id,
                    },
                    None => DateGridEvent::None,
                },
            };
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor_row = self.cursor_row.saturating_sub(1);
                DateGridEvent::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.cursor_row = (self.cursor_row + 1).min(self.rows.len().saturating_sub(1));
                DateGridEvent::None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.cursor_col = self.cursor_col.saturating_sub(1);
                DateGridEvent::None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.cursor_col = (self.cursor_col + 1).min(self.columns().len().saturating_sub(1));
                DateGridEvent::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            KeyCode::Char('o') if self.clickable_rows && self.cursor_row < self.rows.len() => {
                DateGridEvent::RowClicked(self.cursor_row)
            }
            _ => DateGridEvent::None,
        }
    }

    fn column_constraints(&self, inner_width: u16) -> Vec<Constraint> {
        let columns = self.columns();
        let delete_width = u16::try_from(self.icons.delete().width()).unwrap_or(3).max(3);
        let spacing = COLUMN_SPACING * columns.len().saturating_sub(1) as u16;
        let mut usable = inner_width.saturating_sub(spacing);
        if self.show_delete_button {
            usable = usable.saturating_sub(delete_width);
        }

        let mut constraints = match (self.show_id_header, self.id_column_width) {
            (true, Some(percent)) => {
                widths::distribute_width(usable, &widths::column_percentages(self.dates.len() + 1, percent))
                    .into_iter()
                    .map(Constraint::Length)
                    .collect::<Vec<_>>()
            }
            (true, None) => std::iter::once(Constraint::Length(ID_COLUMN_DEFAULT_WIDTH))
                .chain(self.dates.iter().map(|_| Constraint::Fill(1)))
                .collect(),
            (false, _) => self.dates.iter().map(|_| Constraint::Fill(1)).collect(),
        };
        if self.show_delete_button {
            constraints.push(Constraint::Length(delete_width));
        }
        constraints
    }

    fn header_row(&self) -> Row<'static> {
        let cells = self.columns().into_iter().map(|column| match column {
            DateGridColumn::Id | DateGridColumn::Delete => Cell::from(""),
            DateGridColumn::Date(index) => Cell::from(
                Line::from(format_header_date(&self.dates[index], &self.date_format)).alignment(Alignment::Center),
            ),
        });
        Row::new(cells.collect::<Vec<_>>()).style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan))
    }

    fn body_rows(&self) -> Vec<Row<'static>> {
        let columns = self.columns();
        self.rows
            .iter()
            .enumerate()
            .map(|(row_index, row)| {
                let cells = columns.iter().enumerate().map(|(col_index, column)| {
                    let selected = row_index == self.cursor_row && col_index == self.cursor_col;
                    match column {
                        DateGridColumn::Id => {
                            let line = match (&self.editor, selected) {
                                (Some(editor), true) => editor.to_line(true),
                                _ => InputField::new(row.id.clone())
                                    .placeholder(self.id_placeholder.clone())
                                    .to_line(false),
                            };
                            let style = if selected && self.editor.is_none() {
                                Style::default().add_modifier(Modifier::REVERSED)
                            } else {
                                Style::default()
                            };
                            Cell::from(line).style(style)
                        }
                        DateGridColumn::Date(index) => {
                            let bubble = Bubble::with_states(row.status(&self.dates[*index]), self.bubble_states);
                            Cell::from(Line::from(bubble.to_span(&self.icons, selected)).alignment(Alignment::Center))
                        }
                        DateGridColumn::Delete => {
                            let mut style = Style::default().fg(Color::Red);
                            if selected {
                                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                            }
                            Cell::from(
                                Line::from(Span::styled(self.icons.delete(), style)).alignment(Alignment::Center),
                            )
                        }
                    }
                });
                Row::new(cells.collect::<Vec<_>>())
            })
            .collect()
    }

    fn block(&self) -> Block<'static> {
        match self.variant {
            GridVariant::Bordered => Block::default().borders(Borders::ALL).border_type(BorderType::Rounded),
            GridVariant::Borderless => Block::default(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = self.block();
        let inner = block.inner(rect);
        let constraints = self.column_constraints(inner.width);

        if self.rows.is_empty() {
            let table = Table::new(Vec::<Row>::new(), constraints)
                .header(self.header_row())
                .column_spacing(COLUMN_SPACING);
            f.render_widget(block, rect);
            f.render_widget(table, inner);

            let message_area = Rect::new(inner.x, inner.y.saturating_add(2), inner.width, 1).intersection(inner);
            f.render_widget(
                Paragraph::new(self.empty_message.clone())
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::DarkGray)),
                message_area,
            );
        } else {
            let table = Table::new(self.body_rows(), constraints)
                .header(self.header_row())
                .column_spacing(COLUMN_SPACING)
                .block(block)
                .row_highlight_style(Style::default().add_modifier(Modifier::BOLD));
            self.table_state.select(Some(self.cursor_row));
            f.render_stateful_widget(table, rect, &mut self.table_state);
        }

        if self.loading {
            let overlay = LayoutManager::centered_rect_lines(40, 3, rect);
            f.render_widget(Clear, overlay);
            f.render_widget(
                Paragraph::new(format!("{} {}", self.icons.loading(), LOADING_TEXT))
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded))
                    .style(Style::default().fg(Color::Yellow)),
                overlay,
            );
        }
    }
}
