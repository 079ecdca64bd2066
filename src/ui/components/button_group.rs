//! A row or column of buttons with shared alignment, spacing and arrow-key
//! focus movement.

use crate::ui::components::button::Button;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonGroupAlignment {
    #[default]
    Left,
    Center,
    Right,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonGroupDirection {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonGroupSpacing {
    None,
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonGroupSpacing {
    /// Gap between adjacent buttons, in cells
    pub fn gap(&self) -> u16 {
        match self {
            ButtonGroupSpacing::None => 0,
            ButtonGroupSpacing::Small => 1,
            ButtonGroupSpacing::Medium => 2,
            ButtonGroupSpacing::Large => 3,
        }
    }
}

/// Start offsets of each child along the main axis.
///
/// Follows flexbox `justify-content`: the packed alignments keep the fixed
/// `gap` between children, the distributed ones spread the free space (and
/// never shrink below `gap`). Children that overflow are packed from the start.
pub fn layout_offsets(lengths: &[u16], available: u16, alignment: ButtonGroupAlignment, gap: u16) -> Vec<u16> {
    let n = lengths.len();
    if n == 0 {
        return Vec::new();
    }

    let content: u32 = lengths.iter().map(|&l| u32::from(l)).sum();
    let gaps = u32::from(gap) * (n as u32 - 1);
    let available = u32::from(available);
    let packed_free = available.saturating_sub(content + gaps);

    // (leading space, space between neighbours, remainder spread one cell at a time)
    let (lead, between, mut extra) = match alignment {
        ButtonGroupAlignment::Left => (0, u32::from(gap), 0),
        ButtonGroupAlignment::Center => (packed_free / 2, u32::from(gap), 0),
        ButtonGroupAlignment::Right => (packed_free, u32::from(gap), 0),
        ButtonGroupAlignment::SpaceBetween => {
            if n == 1 {
                (0, 0, 0)
            } else {
                let free = available.saturating_sub(content);
                let slots = n as u32 - 1;
                let each = (free / slots).max(u32::from(gap));
                (0, each, if free / slots >= u32::from(gap) { free % slots } else { 0 })
            }
        }
        ButtonGroupAlignment::SpaceAround => {
            // Each child gets equal space on both sides; edges get half a slot
            let free = available.saturating_sub(content);
            let half = free / (2 * n as u32);
            if 2 * half < u32::from(gap) {
                (0, u32::from(gap), 0)
            } else {
                (half, 2 * half, 0)
            }
        }
        ButtonGroupAlignment::SpaceEvenly => {
            let free = available.saturating_sub(content);
            let slots = n as u32 + 1;
            let each = free / slots;
            if each < u32::from(gap) {
                (0, u32::from(gap), 0)
            } else {
                (each, each, 0)
            }
        }
    };

    let mut offsets = Vec::with_capacity(n);
    let mut position = lead;
    for (i, &length) in lengths.iter().enumerate() {
        offsets.push(u16::try_from(position).unwrap_or(u16::MAX));
        position += u32::from(length);
        if i + 1 < n {
            position += between;
            if extra > 0 {
                position += 1;
                extra -= 1;
            }
        }
    }
    offsets
}

pub struct ButtonGroup {
    pub buttons: Vec<Button>,
    pub alignment: ButtonGroupAlignment,
    pub direction: ButtonGroupDirection,
    pub spacing: ButtonGroupSpacing,
    pub aria_label: Option<String>,
    focused: Option<usize>,
}

impl ButtonGroup {
    pub fn new(buttons: Vec<Button>) -> Self {
        Self {
            buttons,
            alignment: ButtonGroupAlignment::default(),
            direction: ButtonGroupDirection::default(),
            spacing: ButtonGroupSpacing::default(),
            aria_label: None,
            focused: None,
        }
    }

    pub fn alignment(mut self, alignment: ButtonGroupAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn direction(mut self, direction: ButtonGroupDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn spacing(mut self, spacing: ButtonGroupSpacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    /// Index of the button holding focus, if any
    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    /// Move focus to a button, blurring the previous one
    pub fn focus(&mut self, index: usize) {
        if index >= self.buttons.len() {
            return;
        }
        if let Some(previous) = self.focused {
            if let Some(button) = self.buttons.get_mut(previous) {
                button.on_blur();
            }
        }
        self.buttons[index].on_focus();
        self.focused = Some(index);
    }

    /// Drop focus from the group entirely
    pub fn blur(&mut self) {
        if let Some(previous) = self.focused.take() {
            if let Some(button) = self.buttons.get_mut(previous) {
                button.on_blur();
            }
        }
    }

    /// Rectangles for each button inside `area`
    pub fn button_areas(&self, area: Rect) -> Vec<Rect> {
        match self.direction {
            ButtonGroupDirection::Horizontal => {
                let widths: Vec<u16> = self.buttons.iter().map(Button::width).collect();
                layout_offsets(&widths, area.width, self.alignment, self.spacing.gap())
                    .into_iter()
                    .zip(widths)
                    .map(|(offset, width)| {
                        let x = area.x.saturating_add(offset);
                        let width = width.min(area.right().saturating_sub(x));
                        Rect::new(x, area.y, width, area.height.min(1))
                    })
                    .collect()
            }
            ButtonGroupDirection::Vertical => {
                let heights = vec![1; self.buttons.len()];
                layout_offsets(&heights, area.height, self.alignment, self.spacing.gap())
                    .into_iter()
                    .zip(self.buttons.iter())
                    .map(|(offset, button)| {
                        let y = area.y.saturating_add(offset);
                        let height = u16::from(y < area.bottom());
                        Rect::new(area.x, y, button.width().min(area.width), height)
                    })
                    .collect()
            }
        }
    }
}

impl Component for ButtonGroup {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(current) = self.focused else {
            return Action::None;
        };

        match key.code {
            KeyCode::Left => {
                self.focus(current.saturating_sub(1));
                Action::None
            }
            KeyCode::Right => {
                self.focus((current + 1).min(self.buttons.len().saturating_sub(1)));
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self
                .buttons
                .get(current)
                .map(Button::activate)
                .unwrap_or(Action::None),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = self.button_areas(rect);
        for (button, area) in self.buttons.iter_mut().zip(areas) {
            if area.width > 0 && area.height > 0 {
                button.render(f, area);
            }
        }
    }

    fn on_focus(&mut self) {
        if self.focused.is_none() && !self.buttons.is_empty() {
            self.focus(0);
        }
    }

    fn on_blur(&mut self) {
        self.blur();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_packs_with_gap() {
        assert_eq!(layout_offsets(&[4, 6], 30, ButtonGroupAlignment::Left, 2), vec![0, 6]);
    }

    #[test]
    fn test_right_aligns_to_end() {
        assert_eq!(layout_offsets(&[4, 6], 30, ButtonGroupAlignment::Right, 2), vec![18, 24]);
    }

    #[test]
    fn test_center_splits_free_space() {
        assert_eq!(layout_offsets(&[10], 30, ButtonGroupAlignment::Center, 2), vec![10]);
    }

    #[test]
    fn test_space_between() {
        assert_eq!(layout_offsets(&[4, 4, 4], 20, ButtonGroupAlignment::SpaceBetween, 0), vec![0, 8, 16]);
    }

    #[test]
    fn test_space_evenly() {
        assert_eq!(layout_offsets(&[4, 4], 20, ButtonGroupAlignment::SpaceEvenly, 0), vec![4, 12]);
    }

    #[test]
    fn test_space_around() {
        assert_eq!(layout_offsets(&[4, 4], 20, ButtonGroupAlignment::SpaceAround, 0), vec![3, 13]);
    }

    #[test]
    fn test_overflow_packs_from_start() {
        assert_eq!(layout_offsets(&[10, 10], 5, ButtonGroupAlignment::Right, 1), vec![0, 11]);
    }
}
