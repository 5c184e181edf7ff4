//! Colour resolution for the clock rows.

use crate::config::{ResolvedConfig, Rgb};
use crate::surface::Ink;
use ratatui::style::Color;

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Concrete colours for the two ink roles plus the marker line.
///
/// Built once at startup from the resolved configuration; with colours
/// disabled every role collapses to the terminal default so the clock still
/// reads on monochrome output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    light: Color,
    dark: Color,
    marker: Color,
}

impl Palette {
    /// Resolve the configured colours under the given colour policy.
    pub fn new(config: &ResolvedConfig, colors: ColorConfig) -> Self {
        if colors.colors_enabled() {
            Self {
                light: to_color(config.light_color),
                dark: to_color(config.dark_color),
                marker: Color::DarkGray,
            }
        } else {
            Self {
                light: Color::Reset,
                dark: Color::Reset,
                marker: Color::Reset,
            }
        }
    }

    /// Cell background colour.
    pub fn light(self) -> Color {
        self.light
    }

    /// Digit ink colour.
    pub fn dark(self) -> Color {
        self.dark
    }

    /// Marker line colour.
    pub fn marker(self) -> Color {
        self.marker
    }

    /// Concrete colour for an ink role.
    pub fn ink(self, ink: Ink) -> Color {
        match ink {
            Ink::Light => self.light,
            Ink::Dark => self.dark,
        }
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

// ===== Tests =====
