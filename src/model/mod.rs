//! Domain model: unit kinds, per-draw frames, error taxonomy.

mod error;
mod frame;
mod unit;

pub use error::AppError;
pub use frame::RenderFrame;
pub use unit::{UnitKind, MILLIS_PER_DAY};
