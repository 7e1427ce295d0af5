//! RISC-V Processor Timing Model Library.
//!
//! This crate estimates the maximum clock frequency, CPI-weighted execution
//! time and relative speedup of processor microarchitecture variants
//! (single-cycle, multi-cycle, pipelined) from a table of component
//! propagation delays.
//!
//! # Architecture
//!
//! * **Delay Library**: immutable component id to nominal delay (ns) table.
//! * **Path Model**: per variant, ordered critical-path candidates built from
//!   library components, resolved when registered.
//! * **Critical-Path Analyzer**: longest candidate, minimum period, f_max.
//! * **Comparative Performance**: execution time and speedup vs a baseline.
//!
//! # Modules
//!
//! * `analysis`: Critical-path analysis and variant comparison.
//! * `common`: Shared identifiers and error handling.
//! * `config`: Configuration loading and parsing.
//! * `model`: Delay library and path model.
//! * `report`: Text rendering of results.

/// Critical-path analysis and comparative performance.
///
/// Pure functions over an immutable [`model::TimingModel`]: the analyzer
/// picks each variant's longest path and derives its clock, and the
/// comparator turns clocks and CPIs into execution times and speedups.
pub mod analysis;

/// Shared identifiers and error handling.
pub mod common;

/// Configuration system for delay tables, variants and workloads.
///
/// Loads and validates TOML configuration files, and carries the built-in
/// RISC-V reference model.
pub mod config;

/// Delay library, variants and path candidates.
pub mod model;

/// Text rendering of analysis and comparison results.
pub mod report;
