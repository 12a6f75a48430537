//! Task form drafting, validation, and submission.
//!
//! A task form collects a title, description, category, priority, and due
//! date, validates the text fields, and hands the trimmed result to a
//! caller-supplied persistence port. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The form controller in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
