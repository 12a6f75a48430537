//! Step definitions for task form submission scenarios.

pub mod then;
pub mod world;
