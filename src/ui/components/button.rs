//! Push button primitive.
//!
//! A button carries the [`Action`] it emits when activated. The caller decides
//! what that action does; the button only knows whether it may fire.

use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Danger,
    Success,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    /// Horizontal padding on each side of the label, in cells
    pub fn padding(&self) -> u16 {
        match self {
            ButtonSize::Small => 1,
            ButtonSize::Medium => 2,
            ButtonSize::Large => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonKind {
    #[default]
    Button,
    Submit,
    Reset,
}

#[derive(Debug, Clone)]
pub struct Button {
    pub label: String,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub kind: ButtonKind,
    pub disabled: bool,
    pub focused: bool,
    pub aria_label: Option<String>,
    pub on_click: Action,
}

impl Button {
    pub fn new(label: impl Into<String>, on_click: Action) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            kind: ButtonKind::default(),
            disabled: false,
            focused: false,
            aria_label: None,
            on_click,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn kind(mut self, kind: ButtonKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    /// Label announced for the button; the visible text unless overridden
    pub fn accessible_label(&self) -> &str {
        self.aria_label.as_deref().unwrap_or(&self.label)
    }

    /// Rendered width: label plus padding on both sides
    pub fn width(&self) -> u16 {
        let label_width = u16::try_from(self.label.width()).unwrap_or(u16::MAX);
        label_width.saturating_add(self.size.padding() * 2)
    }

    /// Emit the click action, unless the button is disabled
    pub fn activate(&self) -> Action {
        if self.disabled {
            log::debug!("Button '{}' ignored activation while disabled", self.accessible_label());
            Action::None
        } else {
            self.on_click.clone()
        }
    }

    pub fn style(&self) -> Style {
        let base = match self.variant {
            ButtonVariant::Primary => Style::default().fg(Color::White).bg(Color::Blue),
            ButtonVariant::Secondary => Style::default().fg(Color::Black).bg(Color::Gray),
            ButtonVariant::Outline => Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            ButtonVariant::Ghost => Style::default().fg(Color::Gray),
            ButtonVariant::Danger => Style::default().fg(Color::White).bg(Color::Red),
            ButtonVariant::Success => Style::default().fg(Color::Black).bg(Color::Green),
        };

        if self.disabled {
            base.add_modifier(Modifier::DIM)
        } else if self.focused {
            base.add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            base
        }
    }

    /// The padded label as a single styled line
    pub fn to_line(&self) -> Line<'static> {
        let pad = " ".repeat(usize::from(self.size.padding()));
        Line::from(Span::styled(format!("{pad}{}{pad}", self.label), self.style()))
    }
}

impl Component for Button {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        f.render_widget(Paragraph::new(self.to_line()).alignment(Alignment::Left), rect);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
