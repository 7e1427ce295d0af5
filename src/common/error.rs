//! Timing Model Errors.
//!
//! Every failure the model can report, from configuration loading through
//! comparison. None of these are recoverable: a timing model that loads with
//! a missing delay or an empty path would silently produce wrong numbers, so
//! each error is propagated to the caller as-is.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for delay library, path model, analysis and comparison.
#[derive(Error, Debug)]
pub enum TimingError {
    /// A path references a component id that is not in the delay library.
    #[error("unknown delay component '{id}'")]
    UnknownComponent { id: String },

    /// The delay library defines the same component id twice.
    #[error("delay component '{id}' is defined more than once")]
    DuplicateComponent { id: String },

    /// A delay is negative, NaN or infinite.
    #[error("delay component '{id}' has invalid delay {delay_ns} ns")]
    InvalidDelay { id: String, delay_ns: f64 },

    /// A path or stage was registered with no elements.
    #[error("path '{path}' of variant '{variant}' has no delay elements")]
    EmptyPath { variant: String, path: String },

    /// Two paths of one variant share a name.
    #[error("path '{path}' is registered twice in variant '{variant}'")]
    DuplicatePath { variant: String, path: String },

    /// A path lookup names a path the variant does not own.
    #[error("variant '{variant}' has no path '{path}'")]
    UnknownPath { variant: String, path: String },

    /// Two variants share a name.
    #[error("variant '{name}' is registered more than once")]
    DuplicateVariant { name: String },

    /// A variant owns no critical-path candidates.
    #[error("variant '{name}' has no paths")]
    EmptyVariant { name: String },

    /// A query names a variant that was never registered.
    #[error("unknown variant '{name}'")]
    UnknownVariant { name: String },

    /// More than one variant carries the baseline flag.
    #[error("variants '{first}' and '{second}' are both flagged as baseline")]
    MultipleBaselines { first: String, second: String },

    /// The critical path of a variant sums to zero or less.
    #[error("variant '{variant}' has degenerate clock period {period_ns} ns")]
    DegenerateTiming { variant: String, period_ns: f64 },

    /// The baseline is not part of the compared set, or none was given.
    #[error("baseline variant '{name}' is not in the compared set")]
    InvalidBaseline { name: String },

    /// A CPI value is zero, negative or not finite.
    #[error("variant '{variant}' has non-positive CPI {cpi}")]
    NonPositiveCpi { variant: String, cpi: f64 },

    /// An instruction count of zero.
    #[error("variant '{variant}' has a non-positive instruction count")]
    NonPositiveInstructionCount { variant: String },

    /// An execution time or speedup overflowed to infinity or NaN.
    #[error("variant '{variant}' has non-finite {quantity} {value}")]
    NonFiniteResult {
        variant: String,
        quantity: &'static str,
        value: f64,
    },

    /// The configuration file could not be read.
    #[error("failed to read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for the schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias for timing model operations.
pub type Result<T> = std::result::Result<T, TimingError>;
