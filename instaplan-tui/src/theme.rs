//! Theme tokens — accent palette and light/dark mode.
//!
//! The three accent palettes (blue, rose, emerald) match the product's web
//! styling; every style in the UI flows from a `Theme` value so switching
//! accent or mode at runtime repaints everything.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Selectable accent palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    Blue,
    Rose,
    Emerald,
}

impl AccentColor {
    pub fn cycle(self) -> AccentColor {
        match self {
            AccentColor::Blue => AccentColor::Rose,
            AccentColor::Rose => AccentColor::Emerald,
            AccentColor::Emerald => AccentColor::Blue,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AccentColor::Blue => "blue",
            AccentColor::Rose => "rose",
            AccentColor::Emerald => "emerald",
        }
    }

    fn color(self) -> Color {
        match self {
            AccentColor::Blue => Color::Rgb(59, 130, 246),
            AccentColor::Rose => Color::Rgb(244, 63, 94),
            AccentColor::Emerald => Color::Rgb(16, 185, 129),
        }
    }
}

/// Light or dark surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> ThemeMode {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub accent: AccentColor,
    pub mode: ThemeMode,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: AccentColor::Blue,
            mode: ThemeMode::Light,
        }
    }
}

impl Theme {
    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent.color())
    }

    pub fn accent_bold(&self) -> Style {
        self.accent().add_modifier(Modifier::BOLD)
    }

    /// Selected/active row emphasis.
    pub fn highlight(&self) -> Style {
        self.accent().add_modifier(Modifier::REVERSED)
    }

    pub fn text(&self) -> Style {
        let fg = match self.mode {
            ThemeMode::Light => Color::Rgb(17, 24, 39),
            ThemeMode::Dark => Color::Rgb(243, 244, 246),
        };
        Style::default().fg(fg)
    }

    pub fn muted(&self) -> Style {
        let fg = match self.mode {
            ThemeMode::Light => Color::Rgb(107, 114, 128),
            ThemeMode::Dark => Color::Rgb(156, 163, 175),
        };
        Style::default().fg(fg)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(Color::Rgb(245, 158, 11))
    }

    pub fn negative(&self) -> Style {
        Style::default().fg(Color::Rgb(239, 68, 68))
    }

    pub fn positive(&self) -> Style {
        Style::default().fg(Color::Rgb(16, 185, 129))
    }

    pub fn panel_border(&self) -> Style {
        self.muted()
    }

    pub fn panel_title(&self) -> Style {
        self.accent_bold()
    }

    /// Unselected portion of a slider track.
    pub fn track(&self) -> Style {
        let fg = match self.mode {
            ThemeMode::Light => Color::Rgb(209, 213, 219),
            ThemeMode::Dark => Color::Rgb(55, 65, 81),
        };
        Style::default().fg(fg)
    }

    /// Selected span between the two handles.
    pub fn track_fill(&self) -> Style {
        self.accent()
    }

    pub fn handle(&self, focused: bool) -> Style {
        if focused {
            self.accent_bold().add_modifier(Modifier::REVERSED)
        } else {
            self.accent_bold()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_cycle_covers_all_palettes() {
        let mut accent = AccentColor::Blue;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(accent);
            accent = accent.cycle();
        }
        assert_eq!(accent, AccentColor::Blue);
        assert_eq!(seen.len(), 3);
        assert!(seen.contains(&AccentColor::Rose));
        assert!(seen.contains(&AccentColor::Emerald));
    }

    #[test]
    fn mode_toggle_roundtrips() {
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggle(), ThemeMode::Light);
    }

    #[test]
    fn theme_serializes_lowercase() {
        let theme = Theme {
            accent: AccentColor::Emerald,
            mode: ThemeMode::Dark,
        };
        let json = serde_json::to_string(&theme).unwrap();
        assert!(json.contains("\"emerald\""));
        assert!(json.contains("\"dark\""));
    }
}
