use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ExploreResult;

/// Root configuration. Loaded from environment variables with the prefix
/// `EXPLORE__`, optionally layered over a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExploreConfig {
    #[serde(default)]
    pub thresholds: Thresholds,
}

/// Numeric cut-offs used by the minimum-probability enforcer and by the
/// normalization check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// `min_prob` above this switches the enforcer to uniform over the support.
    #[serde(default = "default_uniform")]
    pub uniform: f64,
    /// Touched mass above this re-derives the floor from the untouched mass.
    #[serde(default = "default_saturation")]
    pub saturation: f64,
    #[serde(default = "default_sum_tolerance")]
    pub sum_tolerance: f64,
}

fn default_uniform() -> f64 {
    0.999
}
fn default_saturation() -> f64 {
    0.999
}
fn default_sum_tolerance() -> f64 {
    1e-4
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            uniform: default_uniform(),
            saturation: default_saturation(),
            sum_tolerance: default_sum_tolerance(),
        }
    }
}

impl ExploreConfig {
    /// Load configuration from environment variables.
    pub fn load() -> ExploreResult<Self> {
        Self::load_from(None)
    }

    /// Load configuration from an optional TOML file, with environment
    /// variables taking precedence.
    pub fn load_from(path: Option<&Path>) -> ExploreResult<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).format(config::FileFormat::Toml));
        }
        let builder = builder.add_source(
            config::Environment::with_prefix("EXPLORE")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    pub fn from_toml_str(toml: &str) -> ExploreResult<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }
}
