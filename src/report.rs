//! Text rendering of analysis and comparison results.
//!
//! The renderers are thin `Display` wrappers: they only format numbers the
//! analysis passes already computed.

use crate::analysis::{AnalysisResult, Comparison};
use crate::model::TimingModel;
use serde::Serialize;
use std::fmt;

const RULE: &str = "==========================================================";
const THIN_RULE: &str = "----------------------------------------------------------";

/// Per-element delays of every path of one variant, then its critical path.
pub struct Breakdown<'a> {
    pub model: &'a TimingModel,
    pub result: &'a AnalysisResult,
}

impl fmt::Display for Breakdown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", RULE)?;
        writeln!(f, "{} TIMING ANALYSIS", self.result.variant.to_uppercase())?;
        writeln!(f, "{}", RULE)?;
        for path in &self.result.paths {
            let elements = self
                .model
                .resolve_path(&self.result.variant, &path.name)
                .map_err(|_| fmt::Error)?;
            writeln!(f, "\n{}:", path.name)?;
            for (label, delay) in elements {
                writeln!(f, "  {:.<50} {:>6.2} ns", label, delay)?;
            }
            writeln!(f, "  {:.<50} {:>6.2} ns", "TOTAL", path.total_ns)?;
        }
        writeln!(f, "{}", THIN_RULE)?;
        write!(f, "{}", Summary(self.result))
    }
}

/// Critical path, period and maximum frequency of one variant.
pub struct Summary<'a>(pub &'a AnalysisResult);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        writeln!(f, "{}", r.variant)?;
        writeln!(f, "  critical_path          {}", r.critical_path)?;
        writeln!(f, "  period                 {:.2} ns", r.period_ns)?;
        writeln!(f, "  f_max                  {:.2} MHz", r.frequency_mhz)
    }
}

/// Frequency, CPI, execution time and speedup of every compared variant.
pub struct ComparisonTable<'a>(pub &'a Comparison);

impl fmt::Display for ComparisonTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.0.rows();
        writeln!(f, "{}", RULE)?;
        writeln!(f, "PERFORMANCE COMPARISON")?;
        writeln!(f, "{}", RULE)?;
        if let Some(first) = rows.first() {
            writeln!(f, "workload                 {} instructions", first.instructions)?;
        }
        writeln!(f, "baseline                 {}", self.0.baseline())?;
        writeln!(f, "{}", THIN_RULE)?;
        writeln!(
            f,
            "{:<16} {:>12} {:>8} {:>14} {:>9}",
            "variant", "f_max", "cpi", "exec_time", "speedup"
        )?;
        for row in rows {
            writeln!(
                f,
                "{:<16} {:>8.2} MHz {:>8.2} {:>11.2} ns {:>8.2}x",
                row.variant, row.frequency_mhz, row.cpi, row.execution_time_ns, row.speedup
            )?;
        }
        Ok(())
    }
}

/// Frequency and speedup ratios against the baseline and between variants.
pub struct Insights<'a>(pub &'a Comparison);

impl fmt::Display for Insights<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cmp = self.0;
        let base = cmp.baseline();
        let mut others: Vec<&str> = Vec::new();
        for row in cmp.rows() {
            let v = row.variant.as_str();
            if v != base && !others.contains(&v) {
                others.push(v);
            }
        }

        writeln!(f, "{}", THIN_RULE)?;
        writeln!(f, "KEY INSIGHTS")?;
        for v in &others {
            let ratio = cmp.frequency_ratio(v, base).map_err(|_| fmt::Error)?;
            writeln!(f, "  * {} achieves {:.2}x the frequency of {}", v, ratio, base)?;
        }
        for (i, earlier) in others.iter().enumerate() {
            for later in &others[i + 1..] {
                let s = cmp.speedup_between(later, earlier).map_err(|_| fmt::Error)?;
                writeln!(f, "  * {} is {:.2}x faster than {}", later, s, earlier)?;
            }
        }
        for v in &others {
            let s = cmp.speedup_between(v, base).map_err(|_| fmt::Error)?;
            writeln!(f, "  * {} is {:.2}x faster than {}", v, s, base)?;
        }
        Ok(())
    }
}

/// Everything one invocation produced, serialized as a single JSON document.
///
/// Sections that were not requested are left out of the output.
#[derive(Debug, Default, Serialize)]
pub struct JsonReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyses: Option<&'a [AnalysisResult]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<&'a Comparison>,
}
