//! Timing Model.
//!
//! The model pairs a [`DelayLibrary`] with the ordered set of processor
//! variants and their path candidates. It is assembled through
//! [`TimingModelBuilder`], which validates every reference eagerly, and is
//! read-only afterwards. Analysis and comparison borrow it immutably, so a
//! single model can be shared freely between callers.

/// Component delay table.
pub mod delay;

/// Variants, path candidates and their elements.
pub mod path;

pub use delay::{DelayComponent, DelayLibrary};
pub use path::{PathCandidate, PathElement, Variant};

use crate::common::{Result, TimingError, VariantId};
use std::collections::HashSet;

/// Immutable delay library plus registered variants.
#[derive(Clone, Debug)]
pub struct TimingModel {
    library: DelayLibrary,
    variants: Vec<Variant>,
}

impl TimingModel {
    /// Starts building a model over the given delay library.
    pub fn builder(library: DelayLibrary) -> TimingModelBuilder {
        TimingModelBuilder {
            library,
            variants: Vec::new(),
        }
    }

    /// Returns the delay library.
    pub fn library(&self) -> &DelayLibrary {
        &self.library
    }

    /// Returns all variants in registration order.
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Resolves a variant name to its id.
    ///
    /// # Returns
    ///
    /// The variant id, or `UnknownVariant` if no variant has that name.
    pub fn variant_id(&self, name: &str) -> Result<VariantId> {
        self.variants
            .iter()
            .position(|v| v.name == name)
            .map(VariantId)
            .ok_or_else(|| TimingError::UnknownVariant {
                name: name.to_string(),
            })
    }

    /// Returns the variant behind an id this model handed out.
    pub(crate) fn variant(&self, id: VariantId) -> &Variant {
        &self.variants[id.0]
    }

    /// Returns the labelled element delays of one path.
    ///
    /// # Arguments
    ///
    /// * `variant` - Variant name
    /// * `path_name` - Path or stage name within the variant
    ///
    /// # Returns
    ///
    /// `(label, delay_ns)` pairs in registration order.
    pub fn resolve_path(&self, variant: &str, path_name: &str) -> Result<Vec<(String, f64)>> {
        let v = self.variant(self.variant_id(variant)?);
        let path = v.path(path_name).ok_or_else(|| TimingError::UnknownPath {
            variant: variant.to_string(),
            path: path_name.to_string(),
        })?;
        Ok(path.breakdown(&self.library))
    }

    /// Returns a snapshot of this model with one component delay replaced.
    ///
    /// Paths hold component indices, so they carry over to the new library
    /// unchanged.
    pub fn with_delay(&self, component: &str, delay_ns: f64) -> Result<Self> {
        let library = self.library.with_delay(component, delay_ns)?;
        log::debug!("what-if: {} = {} ns", component, delay_ns);
        Ok(Self {
            library,
            variants: self.variants.clone(),
        })
    }
}

/// Incremental, validating constructor for [`TimingModel`].
///
/// Component references are resolved as each path is added, so a bad
/// reference fails here rather than during a later analysis.
pub struct TimingModelBuilder {
    library: DelayLibrary,
    variants: Vec<Variant>,
}

impl TimingModelBuilder {
    /// Registers a new, initially empty variant.
    ///
    /// # Returns
    ///
    /// The id of the new variant, or `DuplicateVariant` if the name is taken.
    pub fn add_variant(&mut self, name: &str) -> Result<VariantId> {
        if self.variants.iter().any(|v| v.name == name) {
            return Err(TimingError::DuplicateVariant {
                name: name.to_string(),
            });
        }
        self.variants.push(Variant {
            name: name.to_string(),
            paths: Vec::new(),
        });
        Ok(VariantId(self.variants.len() - 1))
    }

    /// Registers a path candidate under a variant.
    ///
    /// # Arguments
    ///
    /// * `variant` - Id returned by this builder's [`add_variant`](Self::add_variant)
    /// * `name` - Path name, unique within the variant
    /// * `elements` - `(label, component_id)` pairs in presentation order
    ///
    /// # Returns
    ///
    /// `EmptyPath` for an empty element list, `UnknownComponent` for a
    /// reference missing from the library, `DuplicatePath` for a repeated name,
    /// `UnknownVariant` for an id this builder never handed out.
    pub fn add_path<I, L, C>(&mut self, variant: VariantId, name: &str, elements: I) -> Result<()>
    where
        I: IntoIterator<Item = (L, C)>,
        L: Into<String>,
        C: AsRef<str>,
    {
        let library = &self.library;
        let resolved = elements
            .into_iter()
            .map(|(label, component)| {
                Ok(PathElement {
                    label: label.into(),
                    component: library.resolve(component.as_ref())?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let v = self
            .variants
            .get_mut(variant.0)
            .ok_or_else(|| TimingError::UnknownVariant {
                name: format!("#{}", variant.0),
            })?;
        if resolved.is_empty() {
            return Err(TimingError::EmptyPath {
                variant: v.name.clone(),
                path: name.to_string(),
            });
        }
        if v.path(name).is_some() {
            return Err(TimingError::DuplicatePath {
                variant: v.name.clone(),
                path: name.to_string(),
            });
        }
        v.paths.push(PathCandidate {
            name: name.to_string(),
            elements: resolved,
        });
        Ok(())
    }

    /// Finishes the model.
    ///
    /// # Returns
    ///
    /// The immutable model, or `EmptyVariant` if any variant has no paths.
    pub fn build(self) -> Result<TimingModel> {
        if let Some(v) = self.variants.iter().find(|v| v.paths.is_empty()) {
            return Err(TimingError::EmptyVariant {
                name: v.name.clone(),
            });
        }
        if log::log_enabled!(log::Level::Debug) {
            let used: HashSet<_> = self
                .variants
                .iter()
                .flat_map(|v| v.paths.iter())
                .flat_map(|p| p.elements.iter().map(|e| e.component))
                .collect();
            log::debug!(
                "timing model: {} components ({} referenced), {} variants",
                self.library.len(),
                used.len(),
                self.variants.len()
            );
        }
        Ok(TimingModel {
            library: self.library,
            variants: self.variants,
        })
    }
}
