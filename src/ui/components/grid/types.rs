//! Column, row and sort model types shared by the grid widgets.

use ratatui::layout::{Alignment, Constraint};
use ratatui::text::Line;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl From<GridAlignment> for Alignment {
    fn from(value: GridAlignment) -> Self {
        match value {
            GridAlignment::Left => Alignment::Left,
            GridAlignment::Center => Alignment::Center,
            GridAlignment::Right => Alignment::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    Desc,
    #[default]
    None,
}

impl SortDirection {
    /// Value announced for the column header
    pub fn aria_sort(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ascending",
            SortDirection::Desc => "descending",
            SortDirection::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl GridSize {
    /// Row height in lines
    pub fn row_height(&self) -> u16 {
        match self {
            GridSize::Small | GridSize::Medium => 1,
            GridSize::Large => 2,
        }
    }

    /// Spacing between columns in cells
    pub fn column_spacing(&self) -> u16 {
        match self {
            GridSize::Small => 1,
            GridSize::Medium => 2,
            GridSize::Large => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridVariant {
    #[default]
    Bordered,
    Borderless,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnWidth {
    Small,
    Medium,
    Large,
    XLarge,
    #[default]
    Auto,
    Fit,
}

impl ColumnWidth {
    /// Layout constraint for the preset; `content` is the widest cell for `Fit`
    pub fn constraint(&self, content: u16) -> Constraint {
        match self {
            ColumnWidth::Small => Constraint::Length(8),
            ColumnWidth::Medium => Constraint::Length(16),
            ColumnWidth::Large => Constraint::Length(24),
            ColumnWidth::XLarge => Constraint::Length(32),
            ColumnWidth::Auto => Constraint::Fill(1),
            ColumnWidth::Fit => Constraint::Length(content),
        }
    }
}

/// One entry of a sort model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortItem {
    pub field: String,
    pub sort: SortDirection,
}

impl SortItem {
    pub fn new(field: impl Into<String>, sort: SortDirection) -> Self {
        Self {
            field: field.into(),
            sort,
        }
    }
}

/// Sort precedence, first entry first
pub type SortModel = Vec<SortItem>;

/// A single cell value as seen by sorting and default rendering
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Number(f64::from(value))
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// Rows displayed by a grid expose their cells by field name
pub trait GridRow {
    fn cell(&self, field: &str) -> CellValue;
}

impl GridRow for HashMap<String, CellValue> {
    fn cell(&self, field: &str) -> CellValue {
        self.get(field).cloned().unwrap_or_default()
    }
}

impl GridRow for BTreeMap<String, CellValue> {
    fn cell(&self, field: &str) -> CellValue {
        self.get(field).cloned().unwrap_or_default()
    }
}

/// Arguments passed to a custom cell renderer
pub struct CellParams<'a, T> {
    pub value: CellValue,
    pub row: &'a T,
    pub field: &'a str,
}

pub type RenderCell<T> = Box<dyn Fn(&CellParams<'_, T>) -> Line<'static>>;
pub type RenderHeader<T> = Box<dyn Fn(&GridColumn<T>) -> Line<'static>>;

/// Column definition
pub struct GridColumn<T> {
    pub field: String,
    pub header_name: String,
    pub width: ColumnWidth,
    pub align: GridAlignment,
    pub sortable: bool,
    pub render_cell: Option<RenderCell<T>>,
    pub render_header: Option<RenderHeader<T>>,
}

impl<T> GridColumn<T> {
    pub fn new(field: impl Into<String>, header_name: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            header_name: header_name.into(),
            width: ColumnWidth::default(),
            align: GridAlignment::default(),
            sortable: false,
            render_cell: None,
            render_header: None,
        }
    }

    pub fn width(mut self, width: ColumnWidth) -> Self {
        self.width = width;
        self
    }

    pub fn align(mut self, align: GridAlignment) -> Self {
        self.align = align;
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn render_cell(mut self, render: impl Fn(&CellParams<'_, T>) -> Line<'static> + 'static) -> Self {
        self.render_cell = Some(Box::new(render));
        self
    }

    pub fn render_header(mut self, render: impl Fn(&GridColumn<T>) -> Line<'static> + 'static) -> Self {
        self.render_header = Some(Box::new(render));
        self
    }
}

impl<T: GridRow> GridColumn<T> {
    /// Cell content: the custom renderer if any, else the value as text
    pub fn cell_line(&self, row: &T) -> Line<'static> {
        let value = row.cell(&self.field);
        match &self.render_cell {
            Some(render) => render(&CellParams {
                value,
                row,
                field: &self.field,
            }),
            None => Line::from(value.to_string()),
        }
    }
}

impl<T> GridColumn<T> {
    /// Header content: the custom renderer if any, else the header name
    pub fn header_line(&self) -> Line<'static> {
        match &self.render_header {
            Some(render) => render(self),
            None => Line::from(self.header_name.clone()),
        }
    }
}

impl<T> fmt::Debug for GridColumn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridColumn")
            .field("field", &self.field)
            .field("header_name", &self.header_name)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("sortable", &self.sortable)
            .field("render_cell", &self.render_cell.is_some())
            .field("render_header", &self.render_header.is_some())
            .finish()
    }
}
