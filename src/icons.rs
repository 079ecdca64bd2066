//! Icon service for managing different icon themes
//!
//! Bubble glyphs, sort indicators and action icons all come from here so the
//! whole UI switches theme together.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Glyphs for each bubble state, indexed by state
#[derive(Debug, Clone)]
pub struct BubbleIcons {
    pub states: [&'static str; 4],
}

/// Column sort indicators
#[derive(Debug, Clone)]
pub struct SortIcons {
    pub ascending: &'static str,
    pub descending: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub tasks_title: &'static str,
    pub grid_title: &'static str,
    pub delete: &'static str,
    pub loading: &'static str,
    pub info: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub bubble: BubbleIcons,
    pub sort: SortIcons,
    pub ui: UiIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            bubble: BubbleIcons {
                states: ["⚪", "🌓", "🟢", "⛔"],
            },
            sort: SortIcons {
                ascending: "🔼",
                descending: "🔽",
            },
            ui: UiIcons {
                tasks_title: "📝",
                grid_title: "📊",
                delete: "🗑️",
                loading: "⏳",
                info: "💡",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            bubble: BubbleIcons {
                states: ["○", "◐", "●", "⊘"],
            },
            sort: SortIcons {
                ascending: "▲",
                descending: "▼",
            },
            ui: UiIcons {
                tasks_title: "▶",
                grid_title: "▦",
                delete: "✗",
                loading: "⟳",
                info: "ⓘ",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            bubble: BubbleIcons {
                states: ["( )", "(~)", "(*)", "(x)"],
            },
            sort: SortIcons {
                ascending: "^",
                descending: "v",
            },
            ui: UiIcons {
                tasks_title: ">",
                grid_title: "#",
                delete: "[x]",
                loading: "...",
                info: "i",
            },
        }
    }

    /// Glyph for a bubble state; states past the table wrap around
    #[must_use]
    pub fn bubble(&self, state: u8) -> &'static str {
        let states = self.icons().bubble.states;
        states[usize::from(state) % states.len()]
    }

    #[must_use]
    pub fn sort_ascending(&self) -> &'static str {
        self.icons().sort.ascending
    }

    #[must_use]
    pub fn sort_descending(&self) -> &'static str {
        self.icons().sort.descending
    }

    #[must_use]
    pub fn delete(&self) -> &'static str {
        self.icons().ui.delete
    }

    #[must_use]
    pub fn loading(&self) -> &'static str {
        self.icons().ui.loading
    }

    #[must_use]
    pub fn tasks_title(&self) -> &'static str {
        self.icons().ui.tasks_title
    }

    #[must_use]
    pub fn grid_title(&self) -> &'static str {
        self.icons().ui.grid_title
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let service = IconService::default();
        assert_eq!(service.theme(), IconTheme::Unicode);
    }

    #[test]
    fn test_theme_cycle() {
        let mut service = IconService::new(IconTheme::Ascii);
        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Unicode);
        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Emoji);
        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_bubble_glyphs() {
        let service = IconService::new(IconTheme::Unicode);
        assert_eq!(service.bubble(0), "○");
        assert_eq!(service.bubble(2), "●");
        assert_eq!(service.bubble(4), "○");
    }

    #[test]
    fn test_ascii_sort_icons() {
        let service = IconService::new(IconTheme::Ascii);
        assert_eq!(service.sort_ascending(), "^");
        assert_eq!(service.sort_descending(), "v");
    }
}
