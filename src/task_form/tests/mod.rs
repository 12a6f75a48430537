//! Unit tests for the task form module.
