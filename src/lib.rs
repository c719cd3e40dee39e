//! Cronometra - timed command launcher
//!
//! This library provides the core functionality for running a child command
//! exactly as given, measuring its real, system and user time, and
//! propagating its exit code: quote-aware command-line splitting, search
//! path plus extension-list resolution, scoped signal handling around a
//! blocking wait, and fixed-format report rendering.

pub mod cli;
pub mod cmdline;
pub mod locator;
pub mod pathext;
pub mod report;
pub mod runner;
