//! Agent.
use super::{Env, Policy};
use crate::record::Record;
use crate::select::EliteBatch;
use anyhow::Result;
use std::path::Path;

/// Represents a trainable policy on an environment.
pub trait Agent<E: Env>: Policy<E> {
    /// Performs exactly one supervised optimization step.
    ///
    /// The elite observations are treated as inputs and the elite actions as
    /// target labels; the agent reduces a classification loss between its
    /// action distribution and the targets. Returns a [`Record`] with at
    /// least the scalar `loss`.
    ///
    /// Callers must skip the update when the elite set is empty; passing an
    /// empty set is an error
    /// ([`CemError::EmptyEliteSet`](crate::error::CemError::EmptyEliteSet)),
    /// not a no-op.
    fn opt(&mut self, elite: &EliteBatch<E>) -> Result<Record>;

    /// Saves the parameters of the agent in the given directory.
    fn save_params(&self, path: &Path) -> Result<()>;

    /// Loads the parameters of the agent from the given directory.
    fn load_params(&mut self, path: &Path) -> Result<()>;
}
