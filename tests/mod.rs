//! Test module organization.
//!
//! This module organizes all integration tests for the timing model.

/// Critical-path selection, tie-breaking and clock derivation tests.
mod critical_path_tests;


/// TOML configuration and built-in model tests.
mod config_tests;
