//! Common types used throughout the timing model.
//!
//! This module provides the error taxonomy and the resolved identifier types
//! shared by the delay library, the path model and the analysis passes.

/// Error types and the crate-wide result alias.
pub mod error;

/// Index newtypes for resolved components and variants.
pub mod ids;

pub use error::{Result, TimingError};
pub use ids::{ComponentId, VariantId};
