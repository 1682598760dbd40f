//! Core algorithms – wheel normalisation, inertial scrolling, and scroll-driven
//! interpolation.
//!
//! Nothing in this module depends on any TUI or rendering crate.  The host
//! feeds in wheel samples and layout snapshots, and calls `tick` once per
//! frame; everything else is plain arithmetic over `f64`.

pub mod motions;
pub mod scroll;
pub mod wheel;
