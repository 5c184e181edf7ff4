//! Application error taxonomy.
//!
//! One top-level [`AppError`] composed from the domain-specific failures via
//! `From`, so everything propagates with `?`. The render path itself is
//! total: once the clock is constructed, per-frame computation cannot fail.
//! Everything that can go wrong does so at startup.

use thiserror::Error;

/// Top-level application error returned from `main`'s logic.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or resolved.
    ///
    /// Covers unreadable or malformed TOML as well as invalid values
    /// (bad hex colours, zero scale). Fatal: the clock never starts with a
    /// half-resolved configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// The tracing subscriber could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal setup, rendering or teardown failed.
    ///
    /// Wraps the TUI layer's own error, which includes the fatal
    /// construction-time "missing target" case when the terminal cannot fit
    /// the clock rows.
    #[error("Terminal error: {0}")]
    Tui(#[from] crate::view::TuiError),
}
