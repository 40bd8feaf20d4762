//! Domain types for orbit translation.
//!
//! A raw TLE pair is parsed into a validated [`Tle`] (every numeric field
//! checked at construction time), from which [`OrbitalElements`] derives
//! the quantities the scene description needs. Both steps are pure.

mod elements;
mod tle;

pub use elements::OrbitalElements;
pub use tle::{Tle, TleError};
