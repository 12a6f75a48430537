//! Taskform: task drafting, validation, and submission.
//!
//! This crate provides the logic behind a task entry form: it holds the draft
//! a user is editing, validates the text fields, and hands the trimmed result
//! to a persistence port supplied by the host, reporting failures without
//! losing the user's input.
//!
//! # Architecture
//!
//! Taskform follows hexagonal architecture principles:
//!
//! - **Domain**: Pure drafting and validation logic with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for persistence and notifications
//! - **Adapters**: Concrete implementations of ports (closures, in-memory,
//!   log output)
//!
//! # Modules
//!
//! - [`task_form`]: Task draft validation and the submission controller

pub mod task_form;
