//! Reusable UI components
//!
//! Class names are styled by the desktop app's global stylesheet.

mod button;
mod heart_backdrop;
mod love_meter;
mod reason_dots;

pub use button::*;
pub use heart_backdrop::*;
pub use love_meter::*;
pub use reason_dots::*;
