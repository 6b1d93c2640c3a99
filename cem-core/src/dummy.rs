//! Scripted environments and policies. This module is used for tests.
use crate::error::CemError;
use crate::util::sample_weighted;
use crate::{Act, Env, EnvDescription, Obs, Policy, Step};
use anyhow::Result;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Observation backed by a plain vector.
#[derive(Clone, Debug, PartialEq)]
pub struct DummyObs(Vec<f32>);

impl DummyObs {
    /// Constructs an observation from raw values.
    pub fn new(values: Vec<f32>) -> Self {
        Self(values)
    }

    /// The raw values.
    pub fn values(&self) -> &[f32] {
        &self.0
    }
}

impl Obs for DummyObs {
    fn dim(&self) -> usize {
        self.0.len()
    }

    fn as_slice(&self) -> &[f32] {
        &self.0
    }
}

/// Discrete action over two choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DummyAct(pub usize);

impl Act for DummyAct {
    fn index(&self) -> usize {
        self.0
    }

    fn from_index(ix: usize) -> Self {
        Self(ix)
    }
}

/// Configuration of [`ScriptedEnv`]: episode lengths and total rewards,
/// cycled forever. The shared counters let tests observe how often the
/// environment was reset and stepped, even when it is built inside a
/// trainer.
#[derive(Clone)]
pub struct ScriptedConfig {
    /// Episode lengths, cycled.
    pub lengths: Vec<usize>,

    /// Total episode rewards, cycled; paid out on the final step.
    pub rewards: Vec<f32>,

    /// Number of resets performed.
    pub resets: Arc<AtomicUsize>,

    /// Number of steps performed.
    pub steps: Arc<AtomicUsize>,
}

impl ScriptedConfig {
    /// Creates a script from lengths and rewards of the same cycle.
    pub fn new(lengths: Vec<usize>, rewards: Vec<f32>) -> Self {
        assert_eq!(lengths.len(), rewards.len());
        assert!(lengths.iter().all(|l| *l >= 1));
        Self {
            lengths,
            rewards,
            resets: Arc::new(AtomicUsize::new(0)),
            steps: Arc::new(AtomicUsize::new(0)),
        }
    }
}

/// An environment with a 2-dimensional observation, two actions and a
/// fixed scripted sequence of episode lengths and rewards.
///
/// Observations carry `(episode index, step index)` so that tests can see
/// exactly which decision points survive selection.
pub struct ScriptedEnv {
    config: ScriptedConfig,
    episode_ix: usize,
    step_ix: usize,
    done: bool,
}

impl Env for ScriptedEnv {
    type Config = ScriptedConfig;
    type Obs = DummyObs;
    type Act = DummyAct;

    fn build(config: &Self::Config, _seed: u64) -> Result<Self> {
        Ok(Self {
            config: config.clone(),
            episode_ix: 0,
            step_ix: 0,
            done: true,
        })
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        self.config.resets.fetch_add(1, Ordering::SeqCst);
        self.step_ix = 0;
        self.done = false;
        Ok(DummyObs::new(vec![self.episode_ix as f32, 0.0]))
    }

    fn step(&mut self, act: &Self::Act) -> Result<Step<Self>> {
        if self.done {
            return Err(CemError::EnvironmentMisuse.into());
        }
        self.config.steps.fetch_add(1, Ordering::SeqCst);
        self.step_ix += 1;

        let cycle = self.episode_ix % self.config.lengths.len();
        let terminated = self.step_ix >= self.config.lengths[cycle];
        let reward = if terminated {
            self.config.rewards[cycle]
        } else {
            0.0
        };
        if terminated {
            self.done = true;
            self.episode_ix += 1;
        }

        let obs = DummyObs::new(vec![self.episode_ix as f32, self.step_ix as f32]);
        Ok(Step::new(obs, *act, reward, terminated, false))
    }

    fn description(&self) -> EnvDescription {
        EnvDescription {
            obs_dim: 2,
            n_actions: 2,
        }
    }
}

/// A policy drawing both actions with equal probability from a seeded RNG.
pub struct UniformPolicy {
    rng: SmallRng,
}

impl UniformPolicy {
    /// Creates a seeded uniform policy.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Policy<ScriptedEnv> for UniformPolicy {
    fn sample(&mut self, _obs: &DummyObs) -> DummyAct {
        DummyAct(sample_weighted(&mut self.rng, &[0.5, 0.5]))
    }
}
