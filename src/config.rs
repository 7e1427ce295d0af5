use crate::analysis::VariantSpec;
use crate::common::{Result, TimingError};
use crate::model::{DelayLibrary, TimingModel};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const DEFAULT_INSTRUCTIONS: u64 = 10;
const DEFAULT_CPI: f64 = 1.0;

const BUILTIN_RISCV: &str = include_str!("../configs/riscv.toml");

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub workload: WorkloadConfig,
    pub delays: BTreeMap<String, f64>,
    pub variants: Vec<VariantConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WorkloadConfig {
    #[serde(default = "default_instructions")]
    pub instructions: u64,

    #[serde(default)]
    pub baseline: Option<String>,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            instructions: DEFAULT_INSTRUCTIONS,
            baseline: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct VariantConfig {
    pub name: String,

    #[serde(default = "default_cpi")]
    pub cpi: f64,

    #[serde(default)]
    pub baseline: bool,

    pub paths: Vec<PathConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PathConfig {
    pub name: String,
    pub elements: Vec<ElementConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ElementConfig {
    pub label: String,
    pub component: String,
}

fn default_instructions() -> u64 {
    DEFAULT_INSTRUCTIONS
}

fn default_cpi() -> f64 {
    DEFAULT_CPI
}

impl Config {
    /// Parses a configuration from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| TimingError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Self::parse(&text)
    }

    /// The RISC-V single-cycle, multi-cycle and pipelined reference model.
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_RISCV)
    }

    /// Validates the configuration and builds the immutable timing model.
    ///
    /// Every component reference is resolved here, so unknown ids, empty
    /// paths and duplicate names surface before any analysis runs.
    pub fn build_model(&self) -> Result<TimingModel> {
        self.baseline_flagged()?;
        let library = DelayLibrary::new(self.delays.iter().map(|(id, d)| (id.as_str(), *d)))?;
        let mut builder = TimingModel::builder(library);
        for variant in &self.variants {
            let id = builder.add_variant(&variant.name)?;
            for path in &variant.paths {
                builder.add_path(
                    id,
                    &path.name,
                    path.elements
                        .iter()
                        .map(|e| (e.label.as_str(), e.component.as_str())),
                )?;
            }
        }
        builder.build()
    }

    /// Resolves the baseline variant name.
    ///
    /// The workload's explicit baseline wins over a variant flag. Without
    /// either, `InvalidBaseline` is returned.
    pub fn baseline(&self) -> Result<String> {
        if let Some(name) = &self.workload.baseline {
            return Ok(name.clone());
        }
        self.baseline_flagged()?
            .map(str::to_string)
            .ok_or_else(|| TimingError::InvalidBaseline {
                name: "<none>".to_string(),
            })
    }

    /// The `(variant, cpi, instructions)` inputs for a comparison, in
    /// configuration order.
    pub fn variant_specs(&self, instructions: u64) -> Vec<VariantSpec> {
        self.variants
            .iter()
            .map(|v| VariantSpec::new(v.name.as_str(), v.cpi, instructions))
            .collect()
    }

    fn baseline_flagged(&self) -> Result<Option<&str>> {
        let mut flagged = self.variants.iter().filter(|v| v.baseline);
        let first = flagged.next();
        if let (Some(first), Some(second)) = (first, flagged.next()) {
            return Err(TimingError::MultipleBaselines {
                first: first.name.clone(),
                second: second.name.clone(),
            });
        }
        Ok(first.map(|v| v.name.as_str()))
    }
}
