//! Celestia ssc generator for NORAD two-line element sets.
//!
//! A command-line tool that scrapes the CelesTrak catalog index, locates a
//! satellite's TLE record in a category, and renders an `EllipticalOrbit`
//! scene-description snippet suitable for Celestia.

pub mod celestrak;
pub mod cli;
pub mod domain;
pub mod ssc;
