//! Support library for the `domgrid` binary.
//!
//! Exposes the command pipeline and logging setup so tests and doctests can
//! drive commands without spawning a subprocess.

pub mod cli;
pub mod logging;
