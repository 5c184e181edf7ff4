//! Terminal odometer clock - Entry Point

use clap::Parser;
use odoclock::config::Rgb;
use std::path::PathBuf;
use tracing::info;

/// Animated odometer clock for the terminal
#[derive(Parser, Debug)]
#[command(name = "odoclock")]
#[command(version)]
#[command(about = "Animated odometer clock: calendar units scroll past a fixed marker")]
pub struct Args {
    /// Integer pixel multiplier for glyph rendering (must be positive)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub scale: Option<u32>,

    /// Cell background colour as #rrggbb
    #[arg(long, value_parser = parse_rgb)]
    pub light_color: Option<Rgb>,

    /// Ink colour as #rrggbb
    #[arg(long, value_parser = parse_rgb)]
    pub dark_color: Option<Rgb>,

    /// Render pixel-font glyphs instead of plain text digits
    #[arg(short, long)]
    pub glyphs: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Parse a `#rrggbb` CLI colour argument.
fn parse_rgb(raw: &str) -> Result<Rgb, String> {
    raw.parse().map_err(|e: odoclock::config::ConfigError| e.to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set NO_COLOR env var if --no-color flag is passed
    // This ensures consistent color handling throughout the application
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = odoclock::config::load_config_with_precedence(args.config.clone())?;
        let merged = odoclock::config::merge_config(config_file)?;
        let with_env = odoclock::config::apply_env_overrides(merged);

        // --glyphs only overrides when explicitly set
        let glyphs_override = if args.glyphs { Some(true) } else { None };
        odoclock::config::apply_cli_overrides(
            with_env,
            args.scale,
            args.light_color,
            args.dark_color,
            glyphs_override,
        )
    };

    // Initialize tracing with the configured log file path
    odoclock::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    odoclock::view::run(&config)?;

    Ok(())
}
