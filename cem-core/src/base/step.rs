//! Environment step.
use super::Env;

/// The result of one environment step: the action taken, the next
/// observation, the reward, and the episode-end flags.
pub struct Step<E: Env> {
    /// Action.
    pub act: E::Act,

    /// Observation after the step.
    pub obs: E::Obs,

    /// Reward.
    pub reward: f32,

    /// Flag denoting if the episode is terminated.
    pub is_terminated: bool,

    /// Flag denoting if the episode is truncated (step limit reached).
    pub is_truncated: bool,
}

impl<E: Env> std::fmt::Debug for Step<E>
where
    E::Obs: std::fmt::Debug,
    E::Act: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Step")
            .field("act", &self.act)
            .field("obs", &self.obs)
            .field("reward", &self.reward)
            .field("is_terminated", &self.is_terminated)
            .field("is_truncated", &self.is_truncated)
            .finish()
    }
}

impl<E: Env> Step<E> {
    /// Constructs a [`Step`] object.
    pub fn new(
        obs: E::Obs,
        act: E::Act,
        reward: f32,
        is_terminated: bool,
        is_truncated: bool,
    ) -> Self {
        Step {
            act,
            obs,
            reward,
            is_terminated,
            is_truncated,
        }
    }

    /// Terminated or truncated. Either way the episode is sealed.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.is_terminated || self.is_truncated
    }
}
