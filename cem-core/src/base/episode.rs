//! Episodes and batches of episodes.
use super::Env;
use crate::error::CemError;

/// One decision point of an episode: the observation the policy saw and
/// the action it drew. Owned by exactly one [`Episode`], never mutated.
pub struct EpisodeStep<E: Env> {
    /// Observation before the step.
    pub obs: E::Obs,

    /// Action drawn from the policy's distribution over `obs`.
    pub act: E::Act,
}

/// A finished episode: its total reward and the ordered steps that
/// produced it. Sealed on construction; the sampler builds the step
/// sequence incrementally and constructs the episode when the
/// environment reports the end of the episode.
pub struct Episode<E: Env> {
    reward: f32,
    steps: Vec<EpisodeStep<E>>,
}

impl<E: Env> std::fmt::Debug for EpisodeStep<E>
where
    E::Obs: std::fmt::Debug,
    E::Act: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EpisodeStep")
            .field("obs", &self.obs)
            .field("act", &self.act)
            .finish()
    }
}

impl<E: Env> std::fmt::Debug for Episode<E>
where
    E::Obs: std::fmt::Debug,
    E::Act: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Episode")
            .field("reward", &self.reward)
            .field("steps", &self.steps)
            .finish()
    }
}

impl<E: Env> Episode<E> {
    /// Seals an episode from its accumulated reward and steps.
    pub fn new(reward: f32, steps: Vec<EpisodeStep<E>>) -> Self {
        Self { reward, steps }
    }

    /// Total reward, the accumulated sum of per-step rewards.
    pub fn reward(&self) -> f32 {
        self.reward
    }

    /// The steps of the episode, in the order they were taken.
    pub fn steps(&self) -> &[EpisodeStep<E>] {
        &self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the episode contains no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// An ordered sequence of exactly `batch_size` sealed episodes, in the
/// order they completed.
pub struct Batch<E: Env>(Vec<Episode<E>>);

impl<E: Env> std::fmt::Debug for Batch<E>
where
    E::Obs: std::fmt::Debug,
    E::Act: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Batch").field(&self.0).finish()
    }
}

impl<E: Env> Batch<E> {
    /// Validates and constructs a batch.
    ///
    /// The episode count must equal `batch_size` and every episode must
    /// contain at least one step; anything else is a fatal
    /// [`CemError::MalformedBatch`].
    pub fn new(episodes: Vec<Episode<E>>, batch_size: usize) -> Result<Self, CemError> {
        if episodes.len() != batch_size {
            return Err(CemError::MalformedBatch(format!(
                "expected {} episodes, got {}",
                batch_size,
                episodes.len()
            )));
        }
        if let Some(ix) = episodes.iter().position(|e| e.is_empty()) {
            return Err(CemError::MalformedBatch(format!(
                "episode {} contains no steps",
                ix
            )));
        }
        Ok(Self(episodes))
    }

    /// The episodes of the batch, in completion order.
    pub fn episodes(&self) -> &[Episode<E>] {
        &self.0
    }

    /// Number of episodes. Always equals the `batch_size` it was built with.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the batch contains no episodes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total rewards of the episodes, in completion order.
    pub fn rewards(&self) -> Vec<f32> {
        self.0.iter().map(|e| e.reward()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Batch, Episode, EpisodeStep};
    use crate::dummy::{DummyAct, DummyObs, ScriptedEnv};
    use crate::error::CemError;

    fn episode(len: usize, reward: f32) -> Episode<ScriptedEnv> {
        let steps = (0..len)
            .map(|i| EpisodeStep {
                obs: DummyObs::new(vec![0.0, i as f32]),
                act: DummyAct(0),
            })
            .collect();
        Episode::new(reward, steps)
    }

    #[test]
    fn wrong_episode_count_is_malformed() {
        let episodes = vec![episode(1, 1.0), episode(2, 2.0)];
        let err = Batch::new(episodes, 4).unwrap_err();
        assert!(matches!(err, CemError::MalformedBatch(_)));
    }

    #[test]
    fn empty_episode_is_malformed() {
        let episodes = vec![episode(1, 1.0), episode(0, 0.0)];
        let err = Batch::new(episodes, 2).unwrap_err();
        assert!(matches!(err, CemError::MalformedBatch(_)));
    }

    #[test]
    fn valid_batch_keeps_completion_order() {
        let episodes = vec![episode(1, 1.0), episode(2, 2.0), episode(3, 3.0)];
        let batch = Batch::new(episodes, 3).unwrap();
        assert_eq!(batch.len(), 3);
        assert_eq!(batch.rewards(), vec![1.0, 2.0, 3.0]);
    }
}
