//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur during config loading and resolution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (missing explicit file or permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A colour value is not a `#rrggbb` hex string.
    #[error("Invalid colour {value:?}: expected #rrggbb")]
    InvalidColor {
        /// The rejected value.
        value: String,
    },

    /// Scale must be a positive integer.
    #[error("Invalid scale {value}: must be at least 1")]
    InvalidScale {
        /// The rejected value.
        value: i64,
    },
}

/// An sRGB colour parsed from a `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl FromStr for Rgb {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidColor {
            value: s.to_string(),
        };
        let hex = s.strip_prefix('#').ok_or_else(&invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };
        Ok(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Default cell background colour.
pub const DEFAULT_LIGHT_COLOR: &str = "#f2d974";

/// Default ink colour.
pub const DEFAULT_DARK_COLOR: &str = "#534e52";

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/odoclock/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Integer pixel multiplier for the glyph strips.
    #[serde(default)]
    pub scale: Option<u32>,

    /// Cell background colour as `#rrggbb`.
    #[serde(default)]
    pub light_color: Option<String>,

    /// Ink colour as `#rrggbb`.
    #[serde(default)]
    pub dark_color: Option<String>,

    /// Render pixel-font glyphs (`true`) or plain text digits (`false`).
    #[serde(default)]
    pub glyphs: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
/// Colours are parsed and validated here so the render path never sees a
/// malformed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Integer pixel multiplier, at least 1.
    pub scale: u32,
    /// Cell background colour.
    pub light_color: Rgb,
    /// Ink colour.
    pub dark_color: Rgb,
    /// Glyph rendering enabled.
    pub glyphs: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        // The default colour literals parse by construction.
        let light = DEFAULT_LIGHT_COLOR.parse().unwrap_or(Rgb {
            r: 0xf2,
            g: 0xd9,
            b: 0x74,
        });
        let dark = DEFAULT_DARK_COLOR.parse().unwrap_or(Rgb {
            r: 0x53,
            g: 0x4e,
            b: 0x52,
        });
        Self {
            scale: 1,
            light_color: light,
            dark_color: dark,
            // Glyph strips want a tall terminal; plain text fits anywhere.
            glyphs: false,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/odoclock/odoclock.log` on Unix-like systems, or
/// the platform equivalent elsewhere. Falls back to the current directory
/// when no state directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("odoclock").join("odoclock.log")
    } else {
        PathBuf::from("odoclock.log")
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/odoclock/config.toml` on Unix, appropriate path on
/// other platforms. Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("odoclock").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (like CLI `--config`)
/// 2. `ODOCLOCK_CONFIG` environment variable
/// 3. Default path `~/.config/odoclock/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("ODOCLOCK_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use
/// the default. Colours and scale are validated here, so an error points at
/// the config file rather than surfacing mid-render.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let scale = match config.scale {
        Some(0) => return Err(ConfigError::InvalidScale { value: 0 }),
        Some(scale) => scale,
        None => defaults.scale,
    };
    let light_color = match config.light_color {
        Some(value) => value.parse()?,
        None => defaults.light_color,
    };
    let dark_color = match config.dark_color {
        Some(value) => value.parse()?,
        None => defaults.dark_color,
    };

    Ok(ResolvedConfig {
        scale,
        light_color,
        dark_color,
        glyphs: config.glyphs.unwrap_or(defaults.glyphs),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `ODOCLOCK_SCALE`, `ODOCLOCK_LIGHT_COLOR`, `ODOCLOCK_DARK_COLOR`
/// and `ODOCLOCK_GLYPHS`. Unparseable values are ignored with a warning
/// rather than aborting startup.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var("ODOCLOCK_SCALE") {
        match raw.parse::<u32>() {
            Ok(scale) if scale >= 1 => config.scale = scale,
            _ => warn!(value = %raw, "ignoring unparseable ODOCLOCK_SCALE"),
        }
    }

    if let Ok(raw) = std::env::var("ODOCLOCK_LIGHT_COLOR") {
        match raw.parse() {
            Ok(rgb) => config.light_color = rgb,
            Err(_) => warn!(value = %raw, "ignoring unparseable ODOCLOCK_LIGHT_COLOR"),
        }
    }

    if let Ok(raw) = std::env::var("ODOCLOCK_DARK_COLOR") {
        match raw.parse() {
            Ok(rgb) => config.dark_color = rgb,
            Err(_) => warn!(value = %raw, "ignoring unparseable ODOCLOCK_DARK_COLOR"),
        }
    }

    if let Ok(raw) = std::env::var("ODOCLOCK_GLYPHS") {
        match raw.as_str() {
            "1" | "true" => config.glyphs = true,
            "0" | "false" => config.glyphs = false,
            _ => warn!(value = %raw, "ignoring unparseable ODOCLOCK_GLYPHS"),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    scale_override: Option<u32>,
    light_override: Option<Rgb>,
    dark_override: Option<Rgb>,
    glyphs_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(scale) = scale_override {
        config.scale = scale;
    }

    if let Some(light) = light_override {
        config.light_color = light;
    }

    if let Some(dark) = dark_override {
        config.dark_color = dark;
    }

    if let Some(glyphs) = glyphs_override {
        config.glyphs = glyphs;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
