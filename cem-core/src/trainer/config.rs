//! Configuration of [`Trainer`](super::Trainer).
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`Trainer`](super::Trainer).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct TrainerConfig {
    /// Number of episodes per batch.
    pub batch_size: usize,

    /// Reward percentile (0-100) separating elite episodes.
    pub percentile: f64,

    /// The loop converges when the batch mean reward exceeds this value.
    pub solved_reward: f32,

    /// The maximum number of iterations; 0 means run until convergence.
    pub max_opts: usize,

    /// Interval of flushing records, in iterations.
    pub flush_records_interval: usize,

    /// Random seed passed to the environment.
    pub seed: u64,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            batch_size: 16,
            percentile: 70.0,
            solved_reward: 199.0,
            max_opts: 0,
            flush_records_interval: 1,
            seed: 0,
        }
    }
}

impl TrainerConfig {
    /// Sets the number of episodes per batch.
    pub fn batch_size(mut self, v: usize) -> Self {
        self.batch_size = v;
        self
    }

    /// Sets the elite percentile.
    pub fn percentile(mut self, v: f64) -> Self {
        self.percentile = v;
        self
    }

    /// Sets the solved threshold on the batch mean reward.
    pub fn solved_reward(mut self, v: f32) -> Self {
        self.solved_reward = v;
        self
    }

    /// Sets the maximum number of iterations (0 = unlimited).
    pub fn max_opts(mut self, v: usize) -> Self {
        self.max_opts = v;
        self
    }

    /// Sets the interval of flushing records.
    pub fn flush_records_interval(mut self, v: usize) -> Self {
        self.flush_records_interval = v;
        self
    }

    /// Sets the environment seed.
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = v;
        self
    }

    /// Constructs [`TrainerConfig`] from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`TrainerConfig`] as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
