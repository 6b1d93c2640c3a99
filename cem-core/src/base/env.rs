//! Environment.
use super::{Act, Obs, Step};
use anyhow::Result;

/// Observation and action space sizes of an environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvDescription {
    /// Length of the observation vector.
    pub obs_dim: usize,

    /// Number of discrete actions.
    pub n_actions: usize,
}

/// Represents an environment, typically an MDP with a discrete action set.
///
/// The trainer interacts with an environment only through this trait:
/// reset, step and the space description. Nothing else is exposed.
pub trait Env {
    /// Configurations.
    type Config: Clone;

    /// Observation of the environment.
    type Obs: Obs;

    /// Action of the environment.
    type Act: Act;

    /// Builds an environment with a given random seed.
    fn build(config: &Self::Config, seed: u64) -> Result<Self>
    where
        Self: Sized;

    /// Resets the environment and returns the initial observation.
    fn reset(&mut self) -> Result<Self::Obs>;

    /// Performs an environment step.
    ///
    /// Stepping after an episode has ended, without an intervening
    /// [`reset`](Env::reset), is a usage error: implementations must return
    /// [`CemError::EnvironmentMisuse`](crate::error::CemError::EnvironmentMisuse),
    /// which aborts sampling.
    fn step(&mut self, act: &Self::Act) -> Result<Step<Self>>
    where
        Self: Sized;

    /// Returns the space sizes of this environment.
    fn description(&self) -> EnvDescription;
}
