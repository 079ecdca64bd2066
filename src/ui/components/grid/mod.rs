//! Generic data grid with a controlled, multi-column sort model.
//!
//! The grid never reorders the caller's rows. It keeps the rows in their
//! original order and derives the display order from the sort model it was
//! last given. Header activation reports the next sort model through
//! [`Action::SortModelChanged`]; the caller stores it and passes it back.

pub mod sort;
pub mod types;
pub mod widths;

pub use sort::{compare_rows, compare_values, cycle_sort, sort_direction, sorted_indices};
pub use types::{
    CellParams, CellValue, ColumnWidth, GridAlignment, GridColumn, GridRow, GridSize, GridVariant, SortDirection,
    SortItem, SortModel,
};

use crate::constants::{DEFAULT_GRID_EMPTY_MESSAGE, LOADING_TEXT};
use crate::error::UiError;
use crate::icons::IconService;
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
    Frame,
};

/// Which part of the grid receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridFocus {
    Header,
    #[default]
    Body,
}

pub struct Grid<T> {
    pub columns: Vec<GridColumn<T>>,
    rows: Vec<T>,
    sort_model: SortModel,
    order: Vec<usize>,
    pub size: GridSize,
    pub variant: GridVariant,
    pub loading: bool,
    pub empty_message: String,
    pub title: Option<String>,
    pub aria_label: Option<String>,
    first_column_width: Option<u8>,
    pub hide_first_column_header: bool,
    /// Header activations only report sort changes when someone listens
    pub sortable_model: bool,
    /// Rows only report activation when someone listens
    pub clickable_rows: bool,
    focus: GridFocus,
    header_cursor: usize,
    selected: usize,
    table_state: TableState,
    pub icons: IconService,
}

impl<T: GridRow> Grid<T> {
    pub fn new(columns: Vec<GridColumn<T>>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            sort_model: Vec::new(),
            order: Vec::new(),
            size: GridSize::default(),
            variant: GridVariant::default(),
            loading: false,
            empty_message: DEFAULT_GRID_EMPTY_MESSAGE.to_string(),
            title: None,
            aria_label: None,
            first_column_width: None,
            hide_first_column_header: false,
            sortable_model: true,
            clickable_rows: true,
            focus: GridFocus::default(),
            header_cursor: 0,
            selected: 0,
            table_state: TableState::default(),
            icons: IconService::default(),
        }
    }

    pub fn size(mut self, size: GridSize) -> Self {
        self.size = size;
        self
    }

    pub fn variant(mut self, variant: GridVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn hide_first_column_header(mut self, hide: bool) -> Self {
        self.hide_first_column_header = hide;
        self
    }

    /// Give the first column a fixed share of the width; the others split the rest
    pub fn first_column_width(mut self, percent: u8) -> Result<Self, UiError> {
        self.first_column_width = Some(widths::first_column_percent(percent)?);
        Ok(self)
    }

    /// Replace the rows, keeping the current sort model
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.reorder();
    }

    /// Replace the sort model from the owning state
    pub fn set_sort_model(&mut self, model: SortModel) {
        self.sort_model = model;
        self.reorder();
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn sort_model(&self) -> &[SortItem] {
        &self.sort_model
    }

    /// Original row indices in display order
    pub fn display_order(&self) -> &[usize] {
        &self.order
    }

    pub fn focus(&self) -> GridFocus {
        self.focus
    }

    pub fn header_cursor(&self) -> usize {
        self.header_cursor
    }

    /// Original index of the highlighted row
    pub fn selected_row(&self) -> Option<usize> {
        self.order.get(self.selected).copied()
    }

    fn reorder(&mut self) {
        self.order = sorted_indices(&self.rows, &self.sort_model);
        self.selected = self.selected.min(self.order.len().saturating_sub(1));
    }

    /// Activate the header of column `index`
    pub fn activate_header(&self, index: usize) -> Action {
        match self.columns.get(index) {
            Some(column) if column.sortable && self.sortable_model => {
                Action::SortModelChanged(cycle_sort(&self.sort_model, &column.field))
            }
            _ => Action::None,
        }
    }

    /// Activate the highlighted row
    pub fn activate_row(&self) -> Action {
        match self.selected_row() {
            Some(index) if self.clickable_rows => Action::RowClicked(index),
            _ => Action::None,
        }
    }

    fn column_constraints(&self, inner_width: u16) -> Vec<Constraint> {
        let spacing = self.size.column_spacing() * self.columns.len().saturating_sub(1) as u16;
        let usable = inner_width.saturating_sub(spacing);

        match self.first_column_width {
            Some(first) => widths::distribute_width(usable, &widths::column_percentages(self.columns.len(), first))
                .into_iter()
                .map(Constraint::Length)
                .collect(),
            None => self
                .columns
                .iter()
                .map(|column| {
                    let content = self
                        .rows
                        .iter()
                        .map(|row| column.cell_line(row).width())
                        .chain(std::iter::once(column.header_name.chars().count() + 2))
                        .max()
                        .unwrap_or(0);
                    column.width.constraint(u16::try_from(content).unwrap_or(u16::MAX))
                })
                .collect(),
        }
    }

    fn header_row(&self) -> Row<'static> {
        let cells = self.columns.iter().enumerate().map(|(index, column)| {
            if index == 0 && self.hide_first_column_header {
                return Cell::from("");
            }

            let mut spans = column.header_line().spans;
            match sort_direction(&self.sort_model, &column.field) {
                SortDirection::Asc => spans.push(Span::raw(format!(" {}", self.icons.sort_ascending()))),
                SortDirection::Desc => spans.push(Span::raw(format!(" {}", self.icons.sort_descending()))),
                SortDirection::None => {}
            }

            let mut style = Style::default().add_modifier(Modifier::BOLD);
            if column.sortable {
                style = style.fg(Color::Cyan);
            }
            if self.focus == GridFocus::Header && index == self.header_cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }

            Cell::from(Line::from(spans).alignment(column.align.into())).style(style)
        });

        Row::new(cells.collect::<Vec<_>>()).height(1).bottom_margin(u16::from(self.size == GridSize::Large))
    }

    fn body_rows(&self) -> Vec<Row<'static>> {
        self.order
            .iter()
            .map(|&index| {
                let row = &self.rows[index];
                let cells: Vec<Cell> = self
                    .columns
                    .iter()
                    .map(|column| Cell::from(column.cell_line(row).alignment(column.align.into())))
                    .collect();
                Row::new(cells).height(self.size.row_height())
            })
            .collect()
    }

    fn block(&self) -> Block<'static> {
        let mut block = match self.variant {
            GridVariant::Bordered => Block::default().borders(Borders::ALL).border_type(BorderType::Rounded),
            GridVariant::Borderless => Block::default(),
        };
        if let Some(title) = &self.title {
            block = block.title(format!(" {} ", title));
        }
        block
    }
}

impl<T: GridRow> Component for Grid<T> {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match (self.focus, key.code) {
            (_, KeyCode::Tab) | (_, KeyCode::BackTab) => {
                self.focus = match self.focus {
                    GridFocus::Header => GridFocus::Body,
                    GridFocus::Body => GridFocus::Header,
                };
                Action::None
            }
            (GridFocus::Header, KeyCode::Left) | (GridFocus::Header, KeyCode::Char('h')) => {
                self.header_cursor = self.header_cursor.saturating_sub(1);
                Action::None
            }
            (GridFocus::Header, KeyCode::Right) | (GridFocus::Header, KeyCode::Char('l')) => {
                self.header_cursor = (self.header_cursor + 1).min(self.columns.len().saturating_sub(1));
                Action::None
            }
            (GridFocus::Header, KeyCode::Down) | (GridFocus::Header, KeyCode::Char('j')) => {
                self.focus = GridFocus::Body;
                Action::None
            }
            (GridFocus::Header, KeyCode::Enter) | (GridFocus::Header, KeyCode::Char(' ')) => {
                self.activate_header(self.header_cursor)
            }
            (GridFocus::Body, KeyCode::Up) | (GridFocus::Body, KeyCode::Char('k')) => {
                if self.selected == 0 {
                    self.focus = GridFocus::Header;
                } else {
                    self.selected -= 1;
                }
                Action::None
            }
            (GridFocus::Body, KeyCode::Down) | (GridFocus::Body, KeyCode::Char('j')) => {
                if self.selected + 1 < self.order.len() {
                    self.selected += 1;
                }
                Action::None
            }
            (GridFocus::Body, KeyCode::Enter) | (GridFocus::Body, KeyCode::Char(' ')) => self.activate_row(),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = self.block();
        let inner = block.inner(rect);
        let constraints = self.column_constraints(inner.width);

        if self.rows.is_empty() {
            let table = Table::new(Vec::<Row>::new(), constraints)
                .header(self.header_row())
                .column_spacing(self.size.column_spacing());
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
                .column_spacing(self.size.column_spacing())
                .block(block)
                .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

            self.table_state
                .select((self.focus == GridFocus::Body).then_some(self.selected));
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

    fn on_blur(&mut self) {
        self.table_state.select(None);
    }
}
