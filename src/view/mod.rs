//! TUI rendering and terminal management (impure shell).
//!
//! Everything under here owns the terminal: raw mode, the alternate
//! screen, the 50 ms tick loop and the widgets that blit drawer surfaces
//! into the frame. The clock itself never touches the terminal; it only
//! paints its own surfaces.

mod layout;
mod strip;
mod styles;

pub use layout::{render_layout, required_size, row_height};
pub use strip::StripView;
pub use styles::{ColorConfig, Palette};

use crate::clock::{Cascade, RenderMode};
use crate::config::ResolvedConfig;
use crate::model::UnitKind;
use chrono::{DateTime, Local, TimeZone};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations.
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// The terminal has too few rows for every unit strip.
    ///
    /// Raised at construction time: a drawer without a render target is
    /// fatal, there is no degraded mode.
    #[error("no render target for the {unit} row: need a {required}-row terminal, have {available}")]
    MissingTarget {
        /// First unit whose row does not fit.
        unit: UnitKind,
        /// Rows the clock needs.
        required: u16,
        /// Rows the terminal has.
        available: u16,
    },

    /// The terminal is too narrow to keep the marker line on screen.
    #[error("terminal too narrow: need {required} columns, have {available}")]
    TooNarrow {
        /// Columns the clock needs.
        required: u16,
        /// Columns the terminal has.
        available: u16,
    },
}

/// Interval of the driving timer. Short enough for the seconds strip to
/// scroll smoothly; every slower strip repaints via the cascade.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Main TUI application.
///
/// Generic over backend to support testing with TestBackend.
#[derive(Debug)]
pub struct ClockApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    cascade: Cascade,
    mode: RenderMode,
    palette: Palette,
    scale: u32,
}

impl ClockApp<CrosstermBackend<Stdout>> {
    /// Create and initialize the application on the real terminal.
    ///
    /// Sets up raw mode with the alternate screen. Callers must restore
    /// the terminal afterwards, including when this returns an error.
    pub fn bootstrap(config: &ResolvedConfig) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Self::new(terminal, config)
    }

    /// Run the main event loop.
    ///
    /// Returns when the user quits (q, Esc or Ctrl+C). The timer drives
    /// the seconds strip; slower strips repaint only when the cascade
    /// reaches them. Key and resize events repaint immediately without
    /// advancing the clock.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.tick_at(&Local::now());
        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if is_quit_key(&key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(_, _) => {
                        self.draw()?;
                    }
                    _ => {}
                }
            } else {
                // Timer elapsed - advance the clock and repaint
                self.tick_at(&Local::now());
                self.draw()?;
            }
        }
    }
}

impl<B> ClockApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create the application over an existing terminal.
    ///
    /// Fails with [`TuiError::MissingTarget`] or [`TuiError::TooNarrow`]
    /// when the terminal cannot fit the clock at the configured mode and
    /// scale.
    pub fn new(terminal: Terminal<B>, config: &ResolvedConfig) -> Result<Self, TuiError> {
        let mode = if config.glyphs {
            RenderMode::Glyphs
        } else {
            RenderMode::Text
        };
        let size = terminal.size()?;
        check_fit(size.width, size.height, mode, config.scale)?;

        let palette = Palette::new(config, ColorConfig::from_env_and_args(false));
        Ok(Self {
            terminal,
            cascade: Cascade::new(mode),
            mode,
            palette,
            scale: config.scale,
        })
    }

    /// Advance the cascade to `now`. Returns the units that were redrawn.
    pub fn tick_at<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> Vec<UnitKind> {
        self.cascade.tick(now)
    }

    /// Render the current drawer surfaces into the terminal.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let cascade = &self.cascade;
        let (mode, palette, scale) = (self.mode, self.palette, self.scale);
        self.terminal
            .draw(|frame| render_layout(frame, cascade, mode, palette, scale))?;
        Ok(())
    }

    /// The cascade, for inspecting drawer state.
    pub fn cascade(&self) -> &Cascade {
        &self.cascade
    }

    /// The terminal, for inspecting the rendered buffer in tests.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Check the terminal can fit the clock; identify the first missing row.
fn check_fit(width: u16, height: u16, mode: RenderMode, scale: u32) -> Result<(), TuiError> {
    let (req_w, req_h) = required_size(mode, scale);
    if width < req_w {
        return Err(TuiError::TooNarrow {
            required: req_w,
            available: width,
        });
    }
    if height < req_h {
        let per_row = row_height(mode, scale);
        let fitting = height.saturating_sub(2) / per_row;
        let unit = UnitKind::ALL[usize::from(fitting).min(UnitKind::ALL.len() - 1)];
        return Err(TuiError::MissingTarget {
            unit,
            required: req_h,
            available: height,
        });
    }
    Ok(())
}

/// Quit on q, Esc or Ctrl+C key presses.
fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Initialize and run the TUI application.
///
/// This is the main entry point for the TUI. It handles terminal setup,
/// runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by the caller before calling this.
pub fn run(config: &ResolvedConfig) -> Result<(), TuiError> {
    let mut app = match ClockApp::bootstrap(config) {
        Ok(app) => app,
        Err(err) => {
            // Raw mode may already be active; put the terminal back before
            // surfacing the construction error.
            let _ = restore_terminal();
            return Err(err);
        }
    };
    info!("clock started");

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state.
///
/// Disables raw mode and leaves the alternate screen.
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

// ===== Tests =====
