//! Critical-Path Candidates.
//!
//! A variant (single-cycle, multi-cycle, pipelined, ...) owns an ordered list
//! of path candidates. Each candidate is an ordered list of labelled delay
//! elements whose component references were resolved against the delay
//! library when the candidate was registered.

use crate::common::ComponentId;
use crate::model::delay::DelayLibrary;

/// One labelled step of a path, e.g. "Wire to ALU" on `wire_medium`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathElement {
    /// Presentation label for the step.
    pub label: String,
    /// Resolved delay component.
    pub component: ComponentId,
}

/// A named sequence of delay elements belonging to one variant.
///
/// Element order is kept for presentation only; the total is a plain sum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathCandidate {
    /// Path or stage name, unique within the variant.
    pub name: String,
    /// Non-empty, ordered delay elements.
    pub elements: Vec<PathElement>,
}

impl PathCandidate {
    /// Sums the delays of all elements.
    ///
    /// Elements are added in registration order so that two candidates with
    /// identical element sequences produce bit-identical totals.
    ///
    /// # Arguments
    ///
    /// * `library` - Delay library the elements were resolved against
    ///
    /// # Returns
    ///
    /// Total path delay in nanoseconds.
    pub fn total_ns(&self, library: &DelayLibrary) -> f64 {
        self.elements
            .iter()
            .fold(0.0, |acc, e| acc + library.delay(e.component))
    }

    /// Returns each element's label paired with its delay.
    pub fn breakdown(&self, library: &DelayLibrary) -> Vec<(String, f64)> {
        self.elements
            .iter()
            .map(|e| (e.label.clone(), library.delay(e.component)))
            .collect()
    }
}

/// A microarchitecture configuration and its critical-path candidates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variant {
    /// Variant name, unique within the model.
    pub name: String,
    /// Candidates in registration order.
    pub paths: Vec<PathCandidate>,
}

impl Variant {
    /// Finds a candidate by name.
    pub fn path(&self, name: &str) -> Option<&PathCandidate> {
        self.paths.iter().find(|p| p.name == name)
    }
}
