//! Application-wide theme system
//!
//! A single boolean (light/dark) drives every color in the UI. The palette
//! is always derived from that boolean, so the two can never be observed
//! out of sync.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme mode as it appears in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl Default for ThemeMode {
    fn default() -> Self {
        Self::Light
    }
}

/// Mutable theme state owned by the application root.
///
/// Only `toggle()` mutates the mode; everything else reads the derived
/// palette. Each `App` owns its own `ThemeState`, so independent app
/// instances (e.g. in tests) never share theme state.
#[derive(Debug, Clone)]
pub struct ThemeState {
    dark: bool,
}

impl ThemeState {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            dark: mode == ThemeMode::Dark,
        }
    }

    pub fn dark(&self) -> bool {
        self.dark
    }

    /// Flip light/dark. Toggling twice restores the original mode.
    pub fn toggle(&mut self) {
        self.dark = !self.dark;
    }

    /// Palette derived from the current mode.
    pub fn palette(&self) -> Palette {
        if self.dark {
            Palette::dark()
        } else {
            Palette::light()
        }
    }
}

/// Complete set of UI colors for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub name: &'static str,

    // Outer container
    pub app_background: Color,
    pub app_foreground: Color,

    // Sidebar (same in both modes, like the original panel)
    pub sidebar_background: Color,
    pub sidebar_text: Color,
    pub sidebar_title: Color,
    pub sidebar_active: Color,

    // Topbar
    pub topbar_background: Color,
    pub topbar_foreground: Color,
    pub topbar_border: Color,

    // Cards
    pub card_background: Color,
    pub card_border: Color,
    pub card_title: Color,
    pub card_value: Color,

    // Tables
    pub table_border: Color,
    pub table_header: Color,
    pub table_row: Color,

    // Status
    pub status_ok: Color,
    pub status_error: Color,
}

impl Palette {
    /// Light theme: gray-100 background, gray-800 text.
    pub fn light() -> Palette {
        Palette {
            name: "Light",

            app_background: Color::Rgb(243, 244, 246),
            app_foreground: Color::Rgb(31, 41, 55),

            sidebar_background: Color::Rgb(45, 55, 72),
            sidebar_text: Color::Rgb(243, 244, 246),
            sidebar_title: Color::White,
            sidebar_active: Color::Rgb(99, 179, 237),

            topbar_background: Color::Rgb(237, 242, 247),
            topbar_foreground: Color::Rgb(31, 41, 55),
            topbar_border: Color::Rgb(204, 204, 204),

            card_background: Color::White,
            card_border: Color::Rgb(204, 204, 204),
            card_title: Color::Rgb(113, 128, 150),
            card_value: Color::Rgb(31, 41, 55),

            table_border: Color::Rgb(204, 204, 204),
            table_header: Color::Rgb(31, 41, 55),
            table_row: Color::Rgb(74, 85, 104),

            status_ok: Color::Rgb(56, 161, 105),
            status_error: Color::Rgb(200, 0, 0),
        }
    }

    /// Dark theme: the light pair inverted, gray-800 background.
    pub fn dark() -> Palette {
        Palette {
            name: "Dark",

            app_background: Color::Rgb(31, 41, 55),
            app_foreground: Color::Rgb(243, 244, 246),

            sidebar_background: Color::Rgb(45, 55, 72),
            sidebar_text: Color::Rgb(243, 244, 246),
            sidebar_title: Color::White,
            sidebar_active: Color::Rgb(99, 179, 237),

            topbar_background: Color::Rgb(17, 24, 39),
            topbar_foreground: Color::Rgb(243, 244, 246),
            topbar_border: Color::Rgb(74, 85, 104),

            card_background: Color::Rgb(45, 55, 72),
            card_border: Color::Rgb(74, 85, 104),
            card_title: Color::Rgb(160, 174, 192),
            card_value: Color::Rgb(243, 244, 246),

            table_border: Color::Rgb(74, 85, 104),
            table_header: Color::Rgb(243, 244, 246),
            table_row: Color::Rgb(203, 213, 224),

            status_ok: Color::Rgb(104, 211, 145),
            status_error: Color::Rgb(252, 129, 129),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut theme = ThemeState::new(ThemeMode::Light);
        assert!(!theme.dark());

        for _ in 0..5 {
            theme.toggle();
            theme.toggle();
            assert!(!theme.dark());
        }

        let mut theme = ThemeState::new(ThemeMode::Dark);
        theme.toggle();
        theme.toggle();
        assert!(theme.dark());
    }

    #[test]
    fn test_palette_tracks_mode() {
        let mut theme = ThemeState::new(ThemeMode::Light);
        assert_eq!(theme.palette(), Palette::light());

        theme.toggle();
        assert_eq!(theme.palette(), Palette::dark());
        assert_eq!(theme.palette().app_background, Color::Rgb(31, 41, 55));

        theme.toggle();
        assert_eq!(theme.palette(), Palette::light());
        assert_eq!(theme.palette().app_background, Color::Rgb(243, 244, 246));
    }

    #[test]
    fn test_instances_do_not_share_state() {
        let mut a = ThemeState::new(ThemeMode::Light);
        let b = ThemeState::new(ThemeMode::Light);

        a.toggle();
        assert!(a.dark());
        assert!(!b.dark());
    }

    #[test]
    fn test_light_and_dark_swap_the_base_pair() {
        let light = Palette::light();
        let dark = Palette::dark();
        assert_eq!(light.app_background, dark.app_foreground);
        assert_eq!(light.app_foreground, dark.app_background);
    }
}
