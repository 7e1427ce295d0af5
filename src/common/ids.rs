//! Resolved Identifiers.
//!
//! Component ids and variant names are strings in configuration, but are
//! validated once when the model is built and then carried as plain indices.
//! Indices are only dereferenced inside the crate, against the table that
//! handed them out; public queries go through names.

/// Index of a component inside a [`DelayLibrary`](crate::model::DelayLibrary).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(pub(crate) usize);

impl ComponentId {
    /// Returns the raw table index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Index of a variant inside a [`TimingModel`](crate::model::TimingModel).
///
/// Variants are indexed in registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariantId(pub(crate) usize);

impl VariantId {
    /// Returns the raw table index.
    pub fn index(self) -> usize {
        self.0
    }
}
