//! Step definitions for task dashboard scenarios.

pub mod then;
