//! Scrollable modal panels: keyboard help and the in-memory log viewer.

use crate::constants::{DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
    Frame,
};

/// Lines moved by PageUp/PageDown
const PAGE: usize = 10;

const HELP_TEXT: &str = r"
VIEWS
-----
1           Daily tasks
2           Users grid
Tab         Move focus inside the view

DAILY TASKS
-----------
←↑↓→ / hjkl Move the cursor
Enter       Edit the task name, or toggle a status
Space       Toggle the status under the cursor
o           Open the task
a           Add a task
Esc         Finish editing

USERS GRID
----------
Tab         Switch between header and rows
←→          Pick a column (header)
Enter       Cycle sort: ascending, descending, off
↑↓          Pick a row
Enter       Open the row (rows)
e / d       Edit / delete the highlighted user

GENERAL
-------
?           Toggle this help
G           Toggle the logs panel
t           Cycle icon theme
q, Ctrl+C   Quit
";

/// Shortcut shown below a panel: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Which panel is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Help,
    Logs,
}

pub struct Overlay {
    kind: OverlayKind,
    lines: Vec<String>,
    scroll_offset: usize,
    scrollbar_state: ScrollbarState,
}

impl Overlay {
    pub fn help() -> Self {
        Self::new(OverlayKind::Help, HELP_TEXT.lines().map(str::to_string).collect())
    }

    /// Log viewer showing `entries`, newest first
    pub fn logs(entries: Vec<String>) -> Self {
        Self::new(OverlayKind::Logs, entries)
    }

    fn new(kind: OverlayKind, lines: Vec<String>) -> Self {
        Self {
            kind,
            scrollbar_state: ScrollbarState::new(lines.len()),
            lines,
            scroll_offset: 0,
        }
    }

    pub fn kind(&self) -> OverlayKind {
        self.kind
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    fn max_offset(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    fn scroll_to(&mut self, offset: usize) {
        self.scroll_offset = offset.min(self.max_offset());
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn close_action(&self) -> Action {
        match self.kind {
            OverlayKind::Help => Action::ShowHelp(false),
            OverlayKind::Logs => Action::ShowLogs(false),
        }
    }

    fn title(&self) -> &'static str {
        match self.kind {
            OverlayKind::Help => DIALOG_TITLE_HELP,
            OverlayKind::Logs => DIALOG_TITLE_LOGS,
        }
    }

    fn theme_color(&self) -> Color {
        match self.kind {
            OverlayKind::Help => Color::Cyan,
            OverlayKind::Logs => Color::Yellow,
        }
    }
}

/// Rounded dialog block with a bold colored title
pub fn create_dialog_block(title: &str, theme_color: Color) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Color-coded shortcut line
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut spans = Vec::new();
    for (key, color, desc) in instructions {
        spans.push(Span::styled(*key, Style::default().fg(*color).add_modifier(Modifier::BOLD)));
        spans.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }
    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

impl Component for Overlay {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.close_action(),
            KeyCode::Char('?') if self.kind == OverlayKind::Help => self.close_action(),
            KeyCode::Char('G') if self.kind == OverlayKind::Logs => self.close_action(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_to(self.scroll_offset.saturating_sub(1));
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_to(self.scroll_offset.saturating_add(1));
                Action::None
            }
            KeyCode::PageUp => {
                self.scroll_to(self.scroll_offset.saturating_sub(PAGE));
                Action::None
            }
            KeyCode::PageDown => {
                self.scroll_to(self.scroll_offset.saturating_add(PAGE));
                Action::None
            }
            KeyCode::Home => {
                self.scroll_to(0);
                Action::None
            }
            KeyCode::End => {
                self.scroll_to(usize::MAX);
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let (width, height) = LayoutManager::overlay_dimensions(rect.width, rect.height);
        let area = LayoutManager::centered_rect(width, height, rect);
        f.render_widget(Clear, area);

        let block = create_dialog_block(self.title(), self.theme_color());
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let body = if self.lines.is_empty() {
            Paragraph::new("No logs available")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray))
        } else {
            let text: Vec<Line> = self.lines.iter().map(|l| Line::from(l.clone())).collect();
            Paragraph::new(text)
                .style(Style::default().fg(Color::White))
                .wrap(Wrap { trim: false })
                .scroll((u16::try_from(self.scroll_offset).unwrap_or(u16::MAX), 0))
        };
        f.render_widget(body, chunks[0]);

        if self.lines.len() > usize::from(chunks[0].height) {
            f.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                chunks[0],
                &mut self.scrollbar_state,
            );
        }

        let instructions = create_instructions_paragraph(&[
            ("↑↓", Color::Cyan, " Scroll"),
            (" • ", Color::Gray, ""),
            ("Home/End", Color::Cyan, " Jump"),
            (" • ", Color::Gray, ""),
            ("Esc", Color::Red, " Close"),
        ]);
        f.render_widget(instructions, chunks[1]);
    }
}
