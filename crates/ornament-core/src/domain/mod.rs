//! Domain model.

pub mod circle;

pub use self::circle::{Circle, CircleError, PI_APPROX};
