//! Policy.
use super::Env;

/// A policy on an environment.
///
/// A policy maps an observation to an action. For the cross-entropy method
/// the mapping must be stochastic: actions are drawn from the policy's
/// action distribution, never taken by arg-max, so that exploration is
/// preserved. Any randomness lives in the implementor's own seeded RNG.
pub trait Policy<E: Env> {
    /// Sample an action given an observation.
    fn sample(&mut self, obs: &E::Obs) -> E::Act;
}
