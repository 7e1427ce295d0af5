//! Component Delay Library.
//!
//! This module holds the table of nominal propagation delays that every
//! critical-path candidate is built from. The library is immutable once
//! constructed; what-if edits produce a new library rather than mutating
//! the one other callers may be reading.

use crate::common::{ComponentId, Result, TimingError};
use std::collections::HashMap;

/// A single named delay element.
#[derive(Clone, Debug, PartialEq)]
pub struct DelayComponent {
    /// Unique component identifier, e.g. `memory_read`.
    pub id: String,
    /// Nominal propagation delay in nanoseconds.
    pub delay_ns: f64,
}

/// Immutable mapping from component identifier to nominal delay.
///
/// Components keep the order they were inserted in, which is the order
/// their [`ComponentId`] indices are handed out.
#[derive(Clone, Debug, Default)]
pub struct DelayLibrary {
    components: Vec<DelayComponent>,
    index: HashMap<String, ComponentId>,
}

impl DelayLibrary {
    /// Builds a library from `(id, delay_ns)` pairs.
    ///
    /// # Arguments
    ///
    /// * `entries` - Component identifiers and their delays in nanoseconds
    ///
    /// # Returns
    ///
    /// The library, or `DuplicateComponent` if an id repeats and
    /// `InvalidDelay` if a delay is negative or not finite.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut lib = Self::default();
        for (id, delay_ns) in entries {
            let id = id.into();
            if !delay_ns.is_finite() || delay_ns < 0.0 {
                return Err(TimingError::InvalidDelay { id, delay_ns });
            }
            if lib.index.contains_key(&id) {
                return Err(TimingError::DuplicateComponent { id });
            }
            lib.index.insert(id.clone(), ComponentId(lib.components.len()));
            lib.components.push(DelayComponent { id, delay_ns });
        }
        Ok(lib)
    }

    /// Resolves a component identifier to its index.
    ///
    /// Fails with `UnknownComponent` rather than defaulting, since a silent
    /// zero would corrupt every path that references the component.
    pub fn resolve(&self, id: &str) -> Result<ComponentId> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| TimingError::UnknownComponent { id: id.to_string() })
    }

    /// Looks up the delay of a component by identifier.
    ///
    /// # Arguments
    ///
    /// * `id` - Component identifier
    ///
    /// # Returns
    ///
    /// The nominal delay in nanoseconds, or `UnknownComponent`.
    pub fn lookup(&self, id: &str) -> Result<f64> {
        self.resolve(id).map(|cid| self.delay(cid))
    }

    /// Returns the delay of an already resolved component.
    pub(crate) fn delay(&self, id: ComponentId) -> f64 {
        self.components[id.0].delay_ns
    }

    /// Returns the full component record for an identifier.
    pub fn component(&self, id: &str) -> Result<&DelayComponent> {
        self.resolve(id).map(|cid| &self.components[cid.0])
    }

    /// Returns a copy of this library with one delay replaced.
    ///
    /// The receiver is left untouched, so an analysis already holding it
    /// keeps a consistent snapshot.
    ///
    /// # Arguments
    ///
    /// * `id` - Component identifier to override
    /// * `delay_ns` - New nominal delay in nanoseconds
    pub fn with_delay(&self, id: &str, delay_ns: f64) -> Result<Self> {
        let cid = self.resolve(id)?;
        if !delay_ns.is_finite() || delay_ns < 0.0 {
            return Err(TimingError::InvalidDelay {
                id: id.to_string(),
                delay_ns,
            });
        }
        let mut lib = self.clone();
        lib.components[cid.0].delay_ns = delay_ns;
        Ok(lib)
    }

    /// Iterates over all components in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &DelayComponent> {
        self.components.iter()
    }

    /// Number of components in the library.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if the library holds no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
