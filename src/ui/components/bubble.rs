//! Status bubble: a toggle that cycles through a small set of states.

use crate::icons::IconService;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// States of the default bubble: empty, half, full
pub const DEFAULT_BUBBLE_STATES: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bubble {
    state: u8,
    states: u8,
}

impl Default for Bubble {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Bubble {
    /// A bubble with the default number of states
    pub fn new(state: u8) -> Self {
        Self::with_states(state, DEFAULT_BUBBLE_STATES)
    }

    /// A bubble cycling through `states` values; out-of-range states wrap.
    pub fn with_states(state: u8, states: u8) -> Self {
        let states = states.max(1);
        Self {
            state: state % states,
            states,
        }
    }

    pub fn state(&self) -> u8 {
        self.state
    }

    pub fn states(&self) -> u8 {
        self.states
    }

    /// The state after one activation, wrapping from the last state to zero
    pub fn next_state(&self) -> u8 {
        ((u16::from(self.state) + 1) % u16::from(self.states)) as u8
    }

    /// Advance one state and return the new value
    pub fn activate(&mut self) -> u8 {
        self.state = self.next_state();
        self.state
    }

    pub fn aria_label(&self) -> String {
        format!("Bubble state: {}", self.state)
    }

    pub fn to_span(&self, icons: &IconService, selected: bool) -> Span<'static> {
        let color = match self.state {
            0 => Color::Gray,
            1 => Color::Yellow,
            2 => Color::Green,
            _ => Color::Red,
        };
        let mut style = Style::default().fg(color);
        if selected {
            style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
        }
        Span::styled(icons.bubble(self.state), style)
    }
}
