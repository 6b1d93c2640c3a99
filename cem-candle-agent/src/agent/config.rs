use crate::{MlpConfig, OptimizerConfig};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`CemAgent`](super::CemAgent).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CemAgentConfig {
    /// Configuration of the policy network.
    pub mlp: MlpConfig,

    /// Configuration of the optimizer.
    pub opt: OptimizerConfig,

    /// Seed of the action-sampling RNG.
    pub seed: u64,
}

impl CemAgentConfig {
    /// Creates an agent configuration.
    pub fn new(mlp: MlpConfig, opt: OptimizerConfig, seed: u64) -> Self {
        Self { mlp, opt, seed }
    }

    /// Constructs [`CemAgentConfig`] from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let config = serde_yaml::from_reader(rdr)?;
        Ok(config)
    }

    /// Saves [`CemAgentConfig`] as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
