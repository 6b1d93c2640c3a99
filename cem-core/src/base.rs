//! Environment, policy and episode abstractions.
mod agent;
mod env;
mod episode;
mod policy;
mod step;

pub use agent::Agent;
pub use env::{Env, EnvDescription};
pub use episode::{Batch, Episode, EpisodeStep};
pub use policy::Policy;
pub use step::Step;

use std::fmt::Debug;

/// Observation of an environment.
///
/// An observation is a fixed-length numeric vector describing the
/// environment state at one timestep. It is immutable once produced.
pub trait Obs: Clone + Debug {
    /// Length of the observation vector.
    fn dim(&self) -> usize;

    /// The observation as a flat slice of `f32`.
    fn as_slice(&self) -> &[f32];
}

/// Discrete action of an environment.
///
/// An action is an index into a fixed, finite action set.
pub trait Act: Clone + Debug {
    /// The index of this action, in `[0, n_actions)`.
    fn index(&self) -> usize;

    /// Constructs the action with the given index.
    fn from_index(ix: usize) -> Self;
}
