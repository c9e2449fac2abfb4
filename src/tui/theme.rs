// Theme system for the TUI
//
// A handful of built-in color themes, selected by name from the config and
// cycled at runtime with 't'.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Immo,
    Light,
    Terminal,
}

impl ThemeKind {
    pub fn all() -> &'static [ThemeKind] {
        &[ThemeKind::Immo, ThemeKind::Light, ThemeKind::Terminal]
    }

    /// Look a theme up by config name (case-insensitive), falling back to the default
    pub fn from_name(name: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Immo => "immo",
            ThemeKind::Light => "light",
            ThemeKind::Terminal => "terminal",
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Immo => Theme::immo(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Terminal => Theme::terminal(),
        }
    }
}

/// Resolved colors for every UI element
#[derive(Debug, Clone)]
pub struct Theme {
    pub kind: ThemeKind,

    // ─── Terminal Colors ─────────────────────────────────────
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,

    // ─── Chrome ──────────────────────────────────────────────
    pub title: Color,
    pub border: Color,
    /// Border of the focused panel
    pub highlight: Color,
    pub status_bar: Color,
    pub border_type: BorderType,

    // ─── Rows ────────────────────────────────────────────────
    pub selection: Color,
    pub selection_fg: Color,
    /// Checked checkboxes and the active filter entry
    pub accent: Color,

    // ─── Notifications ───────────────────────────────────────
    pub error: Color,
    pub info: Color,
}

impl Theme {
    pub fn by_name(name: &str) -> Self {
        ThemeKind::from_name(name).theme()
    }

    fn immo() -> Self {
        Self {
            kind: ThemeKind::Immo,
            background: Color::Rgb(22, 27, 34),
            foreground: Color::Rgb(230, 237, 243),
            muted: Color::Rgb(125, 133, 144),
            title: Color::Rgb(255, 107, 53),
            border: Color::Rgb(48, 54, 61),
            highlight: Color::Rgb(255, 107, 53),
            status_bar: Color::Rgb(139, 148, 158),
            border_type: BorderType::Rounded,
            selection: Color::Rgb(56, 65, 80),
            selection_fg: Color::Rgb(255, 255, 255),
            accent: Color::Rgb(63, 185, 80),
            error: Color::Rgb(248, 81, 73),
            info: Color::Rgb(88, 166, 255),
        }
    }

    fn light() -> Self {
        Self {
            kind: ThemeKind::Light,
            background: Color::Rgb(255, 255, 255),
            foreground: Color::Rgb(36, 41, 47),
            muted: Color::Rgb(101, 109, 118),
            title: Color::Rgb(191, 64, 13),
            border: Color::Rgb(208, 215, 222),
            highlight: Color::Rgb(191, 64, 13),
            status_bar: Color::Rgb(87, 96, 106),
            border_type: BorderType::Rounded,
            selection: Color::Rgb(221, 244, 255),
            selection_fg: Color::Rgb(36, 41, 47),
            accent: Color::Rgb(26, 127, 55),
            error: Color::Rgb(207, 34, 46),
            info: Color::Rgb(9, 105, 218),
        }
    }

    /// Uses the terminal's own palette
    fn terminal() -> Self {
        Self {
            kind: ThemeKind::Terminal,
            background: Color::Reset,
            foreground: Color::Reset,
            muted: Color::DarkGray,
            title: Color::Yellow,
            border: Color::Gray,
            highlight: Color::Cyan,
            status_bar: Color::Gray,
            border_type: BorderType::Plain,
            selection: Color::Blue,
            selection_fg: Color::White,
            accent: Color::Green,
            error: Color::Red,
            info: Color::Cyan,
        }
    }

    /// Style for the row under the cursor of a focused table
    pub fn selected_row(&self) -> Style {
        Style::default()
            .bg(self.selection)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style depending on focus
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.highlight)
        } else {
            Style::default().fg(self.border)
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::immo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_is_case_insensitive_with_fallback() {
        assert_eq!(ThemeKind::from_name("Light"), ThemeKind::Light);
        assert_eq!(ThemeKind::from_name("TERMINAL"), ThemeKind::Terminal);
        assert_eq!(ThemeKind::from_name("dracula"), ThemeKind::Immo);
    }

    #[test]
    fn test_cycle_visits_every_theme() {
        let mut kind = ThemeKind::default();
        for _ in 0..ThemeKind::all().len() {
            kind = kind.next();
        }
        assert_eq!(kind, ThemeKind::default());
    }
}
