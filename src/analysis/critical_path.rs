//! Critical-Path Analysis.
//!
//! Sums every path candidate of a variant, picks the longest one and derives
//! the minimum clock period and maximum clock frequency from it.

use crate::common::{Result, TimingError, VariantId};
use crate::model::TimingModel;
use serde::Serialize;

/// Converts a period in nanoseconds to a frequency in MHz: `f = 1000 / T`.
pub const MHZ_NS: f64 = 1000.0;

/// Total delay of one path candidate.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PathTiming {
    /// Path or stage name.
    pub name: String,
    /// Summed element delays in nanoseconds.
    pub total_ns: f64,
}

/// Timing summary of one variant.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Variant name.
    pub variant: String,
    /// Name of the longest path; the first registered one on a tie.
    pub critical_path: String,
    /// Minimum clock period in nanoseconds, equal to the critical path delay.
    pub period_ns: f64,
    /// Maximum clock frequency in MHz.
    pub frequency_mhz: f64,
    /// Every candidate's total, in registration order.
    pub paths: Vec<PathTiming>,
}

/// Analyzes a variant by name.
///
/// # Arguments
///
/// * `model` - Timing model holding the variant
/// * `variant` - Variant name
///
/// # Returns
///
/// The analysis result, `UnknownVariant` if the name is not registered, or
/// `DegenerateTiming` if the critical path does not sum to a positive delay.
pub fn analyze(model: &TimingModel, variant: &str) -> Result<AnalysisResult> {
    analyze_variant(model, model.variant_id(variant)?)
}

/// Analyzes a variant by an id the model handed out.
pub(crate) fn analyze_variant(model: &TimingModel, id: VariantId) -> Result<AnalysisResult> {
    let library = model.library();
    let variant = model.variant(id);

    let paths: Vec<PathTiming> = variant
        .paths
        .iter()
        .map(|p| PathTiming {
            name: p.name.clone(),
            total_ns: p.total_ns(library),
        })
        .collect();

    let mut critical: Option<usize> = None;
    for (i, path) in paths.iter().enumerate() {
        log::trace!("{}: {} = {:.3} ns", variant.name, path.name, path.total_ns);
        let Some(best) = critical.map(|b| &paths[b]) else {
            critical = Some(i);
            continue;
        };
        if path.total_ns > best.total_ns {
            critical = Some(i);
        } else if path.total_ns == best.total_ns {
            log::info!(
                "{}: '{}' ties '{}' at {:.3} ns, keeping '{}'",
                variant.name,
                path.name,
                best.name,
                best.total_ns,
                best.name
            );
        }
    }

    // Variants are non-empty by construction.
    let critical = critical.ok_or_else(|| TimingError::EmptyVariant {
        name: variant.name.clone(),
    })?;
    let critical_path = paths[critical].name.clone();
    let period_ns = paths[critical].total_ns;
    if period_ns <= 0.0 {
        return Err(TimingError::DegenerateTiming {
            variant: variant.name.clone(),
            period_ns,
        });
    }
    let frequency_mhz = MHZ_NS / period_ns;

    log::debug!(
        "{}: critical path '{}', period {:.2} ns, f_max {:.2} MHz",
        variant.name,
        critical_path,
        period_ns,
        frequency_mhz
    );

    Ok(AnalysisResult {
        variant: variant.name.clone(),
        critical_path,
        period_ns,
        frequency_mhz,
        paths,
    })
}

/// Analyzes every variant of the model in registration order.
pub fn analyze_all(model: &TimingModel) -> Result<Vec<AnalysisResult>> {
    (0..model.variants().len())
        .map(|i| analyze_variant(model, VariantId(i)))
        .collect()
}
