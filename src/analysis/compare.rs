//! Comparative Performance.
//!
//! Combines each variant's clock period with a CPI and an instruction count
//! to get an execution time, then expresses every variant as a speedup over
//! a baseline. Rows keep the caller's order; ranking is left to the caller.

use crate::analysis::critical_path::analyze;
use crate::common::{Result, TimingError};
use crate::model::TimingModel;
use serde::Serialize;

/// One variant to compare, with its externally measured CPI.
#[derive(Clone, Debug, PartialEq)]
pub struct VariantSpec {
    /// Variant name in the timing model.
    pub variant: String,
    /// Cycles per instruction, must be positive.
    pub cpi: f64,
    /// Instructions in the workload, must be non-zero.
    pub instructions: u64,
}

impl VariantSpec {
    /// Creates a comparison input for one variant.
    pub fn new(variant: impl Into<String>, cpi: f64, instructions: u64) -> Self {
        Self {
            variant: variant.into(),
            cpi,
            instructions,
        }
    }
}

/// Per-variant row of a comparison.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VariantMetrics {
    pub variant: String,
    pub critical_path: String,
    pub period_ns: f64,
    pub frequency_mhz: f64,
    pub cpi: f64,
    pub instructions: u64,
    /// `instructions * cpi * period_ns`.
    pub execution_time_ns: f64,
    /// Baseline execution time divided by this row's execution time.
    pub speedup: f64,
}

/// Ordered comparison table against one baseline.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Comparison {
    baseline: String,
    rows: Vec<VariantMetrics>,
}

impl Comparison {
    /// Name of the baseline variant.
    pub fn baseline(&self) -> &str {
        &self.baseline
    }

    /// Rows in input order.
    pub fn rows(&self) -> &[VariantMetrics] {
        &self.rows
    }

    /// Returns the first row for `variant`.
    pub fn get(&self, variant: &str) -> Result<&VariantMetrics> {
        self.rows
            .iter()
            .find(|r| r.variant == variant)
            .ok_or_else(|| TimingError::UnknownVariant {
                name: variant.to_string(),
            })
    }

    /// How many times higher `a`'s maximum frequency is than `b`'s.
    pub fn frequency_ratio(&self, a: &str, b: &str) -> Result<f64> {
        Ok(self.get(a)?.frequency_mhz / self.get(b)?.frequency_mhz)
    }

    /// How many times faster `a` runs the workload than `b`.
    pub fn speedup_between(&self, a: &str, b: &str) -> Result<f64> {
        Ok(self.get(b)?.execution_time_ns / self.get(a)?.execution_time_ns)
    }
}

/// Compares variants against a baseline.
///
/// All inputs are validated before any row is produced, so an error never
/// leaves a partial table behind.
///
/// # Arguments
///
/// * `model` - Timing model the variants are analyzed in
/// * `specs` - Variants to compare, in presentation order
/// * `baseline` - Name of the variant every speedup is relative to
///
/// # Returns
///
/// The comparison, or `InvalidBaseline`, `NonPositiveCpi`,
/// `NonPositiveInstructionCount`, `NonFiniteResult` when a time or speedup
/// overflows, or any error from analysis.
pub fn compare(model: &TimingModel, specs: &[VariantSpec], baseline: &str) -> Result<Comparison> {
    let base_idx = specs
        .iter()
        .position(|s| s.variant == baseline)
        .ok_or_else(|| TimingError::InvalidBaseline {
            name: baseline.to_string(),
        })?;

    for spec in specs {
        if spec.cpi <= 0.0 || !spec.cpi.is_finite() {
            return Err(TimingError::NonPositiveCpi {
                variant: spec.variant.clone(),
                cpi: spec.cpi,
            });
        }
        if spec.instructions == 0 {
            return Err(TimingError::NonPositiveInstructionCount {
                variant: spec.variant.clone(),
            });
        }
    }

    let mut rows = specs
        .iter()
        .map(|spec| {
            let result = analyze(model, &spec.variant)?;
            Ok(VariantMetrics {
                execution_time_ns: spec.instructions as f64 * spec.cpi * result.period_ns,
                variant: result.variant,
                critical_path: result.critical_path,
                period_ns: result.period_ns,
                frequency_mhz: result.frequency_mhz,
                cpi: spec.cpi,
                instructions: spec.instructions,
                speedup: 1.0,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if let Some(row) = rows.iter().find(|r| !r.execution_time_ns.is_finite()) {
        return Err(TimingError::NonFiniteResult {
            variant: row.variant.clone(),
            quantity: "execution time",
            value: row.execution_time_ns,
        });
    }

    let base_time = rows[base_idx].execution_time_ns;
    for (i, row) in rows.iter_mut().enumerate() {
        if i != base_idx {
            row.speedup = base_time / row.execution_time_ns;
            if !row.speedup.is_finite() {
                return Err(TimingError::NonFiniteResult {
                    variant: row.variant.clone(),
                    quantity: "speedup",
                    value: row.speedup,
                });
            }
        }
        log::debug!(
            "{}: cpi {:.2}, time {:.2} ns, speedup {:.2}x",
            row.variant,
            row.cpi,
            row.execution_time_ns,
            row.speedup
        );
    }

    Ok(Comparison {
        baseline: baseline.to_string(),
        rows,
    })
}
