#![warn(missing_docs)]
//! Native control environments.
//!
//! [`CartPoleEnv`] is the calibration task of the trainer: classic
//! cart-pole balancing with `CartPole-v0` semantics (reward 1 per step,
//! truncation at 200 steps, solved around a mean reward of 199).
//! [`CountdownEnv`] is the trivial ten-step toy used by the
//! agent-anatomy demo.
mod cartpole;
mod countdown;

pub use cartpole::{CartPoleAct, CartPoleConfig, CartPoleEnv, CartPoleObs};
pub use countdown::{CountdownAct, CountdownConfig, CountdownEnv, CountdownObs};
