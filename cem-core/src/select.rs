//! Elite episode selection.
use crate::util::{mean, percentile};
use crate::{Batch, Env};

/// The elite set of a batch: the flattened (observation, action) pairs of
/// every episode whose total reward reached the percentile bound, plus the
/// batch statistics.
///
/// `obs` and `acts` are aligned one-to-one and preserve step order within
/// each episode and episode order within the batch. The set is derived and
/// transient; it is recomputed per batch and never persisted.
pub struct EliteBatch<E: Env> {
    /// Observations of the elite steps.
    pub obs: Vec<E::Obs>,

    /// Actions of the elite steps, aligned with `obs`.
    pub acts: Vec<E::Act>,

    /// The percentile-interpolated reward bound used for selection.
    pub reward_bound: f32,

    /// Mean episode reward of the whole batch.
    pub reward_mean: f32,
}

impl<E: Env> EliteBatch<E> {
    /// Number of elite (observation, action) pairs.
    pub fn len(&self) -> usize {
        self.obs.len()
    }

    /// Whether no episode reached the reward bound.
    pub fn is_empty(&self) -> bool {
        self.obs.is_empty()
    }
}

/// Filters a batch down to its elite steps.
///
/// Computes the reward bound as the given percentile (linear
/// interpolation, see [`util::percentile`](crate::util::percentile)) of the
/// episode rewards and the mean reward of the batch. Episodes with a total
/// reward strictly below the bound are discarded entirely; the remaining
/// episodes contribute all of their steps, in order.
///
/// Pure function of its inputs: calling it twice on the same batch with
/// the same percentile yields identical output. An empty elite set is a
/// legal result and must be skipped (not trained on) by the caller.
pub fn filter_batch<E: Env>(batch: &Batch<E>, p: f64) -> EliteBatch<E> {
    let rewards = batch.rewards();
    let reward_bound = percentile(&rewards, p);
    let reward_mean = mean(&rewards);

    let mut obs = Vec::new();
    let mut acts = Vec::new();
    for episode in batch.episodes() {
        if episode.reward() < reward_bound {
            continue;
        }
        for step in episode.steps() {
            obs.push(step.obs.clone());
            acts.push(step.act.clone());
        }
    }

    EliteBatch {
        obs,
        acts,
        reward_bound,
        reward_mean,
    }
}
