//! Terminal odometer clock (odoclock)
//!
//! Renders six horizontal strips - years, months, days, hours, minutes,
//! seconds - of consecutive values that slide past a fixed marker as time
//! advances. Each strip is owned by one drawer; a cascading refresh
//! protocol repaints a strip only when the unit below it rolls over, with
//! the 50 ms timer driving just the seconds strip.

pub mod clock;
pub mod config;
pub mod glyph;
pub mod logging;
pub mod model;
pub mod surface;
pub mod view;
