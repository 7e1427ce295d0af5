//! Timing analysis passes over a [`TimingModel`](crate::model::TimingModel).
//!
//! Both passes are pure functions of the model and their arguments.

/// Critical-path selection, clock period and maximum frequency.
pub mod critical_path;

/// Execution time and speedup across variants.
pub mod compare;

pub use compare::{compare, Comparison, VariantMetrics, VariantSpec};
pub use critical_path::{analyze, analyze_all, AnalysisResult, PathTiming};
