//! Classic cart-pole balancing.
use anyhow::Result;
use cem_core::error::CemError;
use cem_core::{Act, Env, EnvDescription, Obs, Step};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

const GRAVITY: f32 = 9.8;
const MASS_CART: f32 = 1.0;
const MASS_POLE: f32 = 0.1;
const TOTAL_MASS: f32 = MASS_CART + MASS_POLE;
/// Half the pole's length.
const LENGTH: f32 = 0.5;
const POLE_MASS_LENGTH: f32 = MASS_POLE * LENGTH;
const FORCE_MAG: f32 = 10.0;
/// Seconds between state updates.
const TAU: f32 = 0.02;
/// 12 degrees.
const THETA_THRESHOLD: f32 = 12.0 * 2.0 * std::f32::consts::PI / 360.0;
const X_THRESHOLD: f32 = 2.4;

/// Observation `(x, x_dot, theta, theta_dot)`: cart position and
/// velocity, pole angle (radians) and angular velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct CartPoleObs(pub [f32; 4]);

impl Obs for CartPoleObs {
    fn dim(&self) -> usize {
        4
    }

    fn as_slice(&self) -> &[f32] {
        &self.0
    }
}

/// Push the cart left (0) or right (1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartPoleAct(pub usize);

impl Act for CartPoleAct {
    fn index(&self) -> usize {
        self.0
    }

    fn from_index(ix: usize) -> Self {
        Self(ix)
    }
}

/// Configuration of [`CartPoleEnv`].
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct CartPoleConfig {
    /// Episode step limit; reaching it truncates the episode.
    pub max_steps: usize,
}

impl Default for CartPoleConfig {
    /// `CartPole-v0` truncates at 200 steps.
    fn default() -> Self {
        Self { max_steps: 200 }
    }
}

/// Cart-pole balancing with Euler-integrated dynamics.
///
/// The episode terminates when the cart leaves the track
/// (`|x| > 2.4`) or the pole falls past 12 degrees, and truncates at the
/// configured step limit. Every step is rewarded 1.0, so the episode
/// total equals its length.
pub struct CartPoleEnv {
    config: CartPoleConfig,
    state: [f32; 4],
    steps: usize,
    done: bool,
    rng: SmallRng,
}

impl CartPoleEnv {
    fn obs(&self) -> CartPoleObs {
        CartPoleObs(self.state)
    }
}

impl Env for CartPoleEnv {
    type Config = CartPoleConfig;
    type Obs = CartPoleObs;
    type Act = CartPoleAct;

    fn build(config: &Self::Config, seed: u64) -> Result<Self> {
        Ok(Self {
            config: config.clone(),
            state: [0.0; 4],
            steps: 0,
            // A reset is required before the first step.
            done: true,
            rng: SmallRng::seed_from_u64(seed),
        })
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        for v in self.state.iter_mut() {
            *v = self.rng.gen_range(-0.05..0.05);
        }
        self.steps = 0;
        self.done = false;
        Ok(self.obs())
    }

    fn step(&mut self, act: &Self::Act) -> Result<Step<Self>> {
        if self.done {
            return Err(CemError::EnvironmentMisuse.into());
        }

        let [x, x_dot, theta, theta_dot] = self.state;
        let force = if act.index() == 0 {
            -FORCE_MAG
        } else {
            FORCE_MAG
        };
        let cos_theta = theta.cos();
        let sin_theta = theta.sin();

        let temp = (force + POLE_MASS_LENGTH * theta_dot * theta_dot * sin_theta) / TOTAL_MASS;
        let theta_acc = (GRAVITY * sin_theta - cos_theta * temp)
            / (LENGTH * (4.0 / 3.0 - MASS_POLE * cos_theta * cos_theta / TOTAL_MASS));
        let x_acc = temp - POLE_MASS_LENGTH * theta_acc * cos_theta / TOTAL_MASS;

        self.state = [
            x + TAU * x_dot,
            x_dot + TAU * x_acc,
            theta + TAU * theta_dot,
            theta_dot + TAU * theta_acc,
        ];
        self.steps += 1;

        let is_terminated =
            self.state[0].abs() > X_THRESHOLD || self.state[2].abs() > THETA_THRESHOLD;
        let is_truncated = !is_terminated && self.steps >= self.config.max_steps;
        if is_terminated || is_truncated {
            self.done = true;
        }

        Ok(Step::new(self.obs(), *act, 1.0, is_terminated, is_truncated))
    }

    fn description(&self) -> EnvDescription {
        EnvDescription {
            obs_dim: 4,
            n_actions: 2,
        }
    }
}
