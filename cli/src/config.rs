use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use pricing_engine::PricingConfig;
use shared::refdata::ReferenceData;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pricing: PricingConfig,
}

impl Config {
    /// Missing config file means defaults; a present but malformed one
    /// is an error.
    pub fn from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let config_file = std::fs::read_to_string(path).context("Couldn't read config file")?;
        let config: Config =
            serde_yaml::from_str(&config_file).context("Couldn't parse config file")?;
        Ok(config)
    }
}

pub fn load_reference_data(path: impl AsRef<Path>) -> anyhow::Result<ReferenceData> {
    let contents =
        std::fs::read_to_string(path).context("Couldn't read reference data file")?;
    let refdata: ReferenceData =
        serde_yaml::from_str(&contents).context("Couldn't parse reference data file")?;
    Ok(refdata)
}
