//! The ten-step countdown toy environment.
use anyhow::Result;
use cem_core::error::CemError;
use cem_core::{Act, Env, EnvDescription, Obs, Step};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Constant all-zero observation; the environment has no real state.
#[derive(Debug, Clone, PartialEq)]
pub struct CountdownObs([f32; 3]);

impl Obs for CountdownObs {
    fn dim(&self) -> usize {
        3
    }

    fn as_slice(&self) -> &[f32] {
        &self.0
    }
}

/// One of two actions; both behave identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownAct(pub usize);

impl Act for CountdownAct {
    fn index(&self) -> usize {
        self.0
    }

    fn from_index(ix: usize) -> Self {
        Self(ix)
    }
}

/// Configuration of [`CountdownEnv`].
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CountdownConfig {
    /// Steps per episode.
    pub steps: usize,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self { steps: 10 }
    }
}

/// Decrements a step counter to zero, paying a uniform random reward per
/// step. No decision matters; the environment exists to demonstrate the
/// agent/environment loop and to exercise the sampler in tests.
pub struct CountdownEnv {
    config: CountdownConfig,
    steps_left: usize,
    rng: SmallRng,
}

impl Env for CountdownEnv {
    type Config = CountdownConfig;
    type Obs = CountdownObs;
    type Act = CountdownAct;

    fn build(config: &Self::Config, seed: u64) -> Result<Self> {
        Ok(Self {
            config: config.clone(),
            steps_left: 0,
            rng: SmallRng::seed_from_u64(seed),
        })
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        self.steps_left = self.config.steps;
        Ok(CountdownObs([0.0; 3]))
    }

    fn step(&mut self, act: &Self::Act) -> Result<Step<Self>> {
        if self.steps_left == 0 {
            return Err(CemError::EnvironmentMisuse.into());
        }
        self.steps_left -= 1;
        let reward: f32 = self.rng.gen();
        Ok(Step::new(
            CountdownObs([0.0; 3]),
            *act,
            reward,
            self.steps_left == 0,
            false,
        ))
    }

    fn description(&self) -> EnvDescription {
        EnvDescription {
            obs_dim: 3,
            n_actions: 2,
        }
    }
}
