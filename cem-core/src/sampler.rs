//! Batch-wise episode sampling.
use crate::{Batch, Env, Episode, EpisodeStep, Policy};
use anyhow::Result;

/// Pull-based generator of fixed-size episode batches.
///
/// Each call to [`sample_batch`](BatchSampler::sample_batch) drives the
/// environment step by step with the given policy, groups the finished
/// episodes in completion order, and returns as soon as exactly
/// `batch_size` of them have been sealed. Execution "suspends" only at
/// that point: the environment and the pending observation are carried in
/// the sampler, so the next pull resumes where the previous one left off.
///
/// The sampler is single-threaded and not rewindable; to restart the
/// stream, construct a fresh sampler.
pub struct BatchSampler<E: Env> {
    /// The environment being sampled from.
    env: E,

    /// Observation to act on next; `None` means a reset is due.
    prev_obs: Option<E::Obs>,

    /// Number of episodes per batch.
    batch_size: usize,
}

impl<E: Env> BatchSampler<E> {
    /// Creates a sampler over the given environment.
    pub fn new(env: E, batch_size: usize) -> Self {
        Self {
            env,
            prev_obs: None,
            batch_size,
        }
    }

    /// Unrolls episodes until `batch_size` of them have finished and
    /// returns them as a validated [`Batch`].
    ///
    /// Every step records the observation the policy acted on, together
    /// with the sampled action; the per-step rewards accumulate into the
    /// episode total. An environment error (notably stepping a terminated
    /// environment) aborts sampling and propagates.
    pub fn sample_batch<P: Policy<E>>(&mut self, policy: &mut P) -> Result<Batch<E>> {
        let mut episodes = Vec::with_capacity(self.batch_size);
        let mut steps: Vec<EpisodeStep<E>> = Vec::new();
        let mut episode_reward = 0.0;

        loop {
            let obs = match self.prev_obs.take() {
                Some(obs) => obs,
                None => self.env.reset()?,
            };

            let act = policy.sample(&obs);
            let step = self.env.step(&act)?;
            episode_reward += step.reward;
            steps.push(EpisodeStep { obs, act });

            if step.is_done() {
                episodes.push(Episode::new(episode_reward, std::mem::take(&mut steps)));
                episode_reward = 0.0;
                // prev_obs stays None: the next iteration resets the env.
                if episodes.len() == self.batch_size {
                    return Ok(Batch::new(episodes, self.batch_size)?);
                }
            } else {
                self.prev_obs = Some(step.obs);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BatchSampler;
    use crate::dummy::{ScriptedConfig, ScriptedEnv, UniformPolicy};
    use crate::{Env, Obs};

    fn scripted_sampler(batch_size: usize) -> BatchSampler<ScriptedEnv> {
        let config = ScriptedConfig::new(vec![1, 2, 3, 4], vec![1.0, 2.0, 3.0, 4.0]);
        let env = ScriptedEnv::build(&config, 0).unwrap();
        BatchSampler::new(env, batch_size)
    }

    #[test]
    fn batches_have_exact_size_and_non_empty_episodes() {
        let mut sampler = scripted_sampler(4);
        let mut policy = UniformPolicy::new(0);

        for _ in 0..3 {
            let batch = sampler.sample_batch(&mut policy).unwrap();
            assert_eq!(batch.len(), 4);
            for episode in batch.episodes() {
                assert!(episode.len() >= 1);
            }
        }
    }

    #[test]
    fn episodes_arrive_in_completion_order() {
        let mut sampler = scripted_sampler(4);
        let mut policy = UniformPolicy::new(0);

        let batch = sampler.sample_batch(&mut policy).unwrap();
        let lengths: Vec<usize> = batch.episodes().iter().map(|e| e.len()).collect();
        assert_eq!(lengths, vec![1, 2, 3, 4]);
        assert_eq!(batch.rewards(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn actions_are_valid_indices_and_obs_have_fixed_dim() {
        let mut sampler = scripted_sampler(4);
        let mut policy = UniformPolicy::new(3);

        let batch = sampler.sample_batch(&mut policy).unwrap();
        for episode in batch.episodes() {
            for step in episode.steps() {
                assert!(crate::Act::index(&step.act) < 2);
                assert_eq!(step.obs.dim(), 2);
            }
        }
    }

    #[test]
    fn sampling_resumes_across_pulls() {
        let mut sampler = scripted_sampler(3);
        let mut policy = UniformPolicy::new(0);

        // Scripted lengths cycle [1, 2, 3, 4]; pulling batches of three
        // must pick up mid-cycle without losing episodes.
        let first = sampler.sample_batch(&mut policy).unwrap();
        let second = sampler.sample_batch(&mut policy).unwrap();
        let lengths: Vec<usize> = first
            .episodes()
            .iter()
            .chain(second.episodes())
            .map(|e| e.len())
            .collect();
        assert_eq!(lengths, vec![1, 2, 3, 4, 1, 2]);
    }
}
