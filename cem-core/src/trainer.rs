//! Train an [`Agent`] with the cross-entropy method.
mod config;

use crate::record::{Record, RecordValue::Scalar, Recorder};
use crate::sampler::BatchSampler;
use crate::select::{filter_batch, EliteBatch};
use crate::{Agent, Env};
use anyhow::Result;
pub use config::TrainerConfig;
use log::{info, warn};

/// Phase of the training loop. [`Converged`](TrainerState::Converged) is
/// terminal; the other states cycle once per batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainerState {
    /// Pulling the next full batch from the sampler.
    Sampling,

    /// Running the elite selector on the batch.
    Selecting,

    /// Performing (or skipping) the supervised update.
    Updating,

    /// The mean reward exceeded the solved threshold; no more batches are
    /// requested.
    Converged,
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Manages the cross-entropy-method training loop.
///
/// Per iteration, objects interact as shown below, closing the loop by
/// mutating the policy parameters:
///
/// ```mermaid
/// graph LR
///     A[Agent]-->|Env::Act|B[BatchSampler]
///     B -->|"Batch&lt;E&gt;"|C[filter_batch]
///     C -->|"EliteBatch&lt;E&gt;"|D[Agent::opt]
///     D -->|parameter update|A
/// ```
///
/// One iteration is atomic with respect to parameter updates: either a
/// full update from a full elite set is applied, or none is. The only
/// recovered failure is an empty elite set, which skips the update while
/// still recording the reward statistics; every other error is fatal and
/// terminates the loop.
pub struct Trainer<E: Env> {
    /// Configuration of the environment used for sampling.
    env_config: E::Config,

    /// Number of episodes per batch.
    batch_size: usize,

    /// Reward percentile (0-100) separating elite episodes.
    percentile: f64,

    /// The loop converges when `reward_mean` exceeds this value.
    solved_reward: f32,

    /// Upper bound on iterations, 0 meaning unlimited.
    max_opts: usize,

    /// Interval of flushing records, in iterations.
    flush_records_interval: usize,

    /// Seed passed to the environment.
    seed: u64,

    state: TrainerState,
}

impl<E: Env> Trainer<E> {
    /// Constructs a trainer.
    pub fn build(config: TrainerConfig, env_config: E::Config) -> Self {
        Self {
            env_config,
            batch_size: config.batch_size,
            percentile: config.percentile,
            solved_reward: config.solved_reward,
            max_opts: config.max_opts,
            flush_records_interval: config.flush_records_interval,
            seed: config.seed,
            state: TrainerState::Sampling,
        }
    }

    /// The current phase of the loop.
    pub fn state(&self) -> TrainerState {
        self.state
    }

    /// The UPDATING phase: exactly one optimization step, skipped (not
    /// failed, not faked) when the elite set is empty. Returns `None` when
    /// the update was skipped.
    pub fn opt_step<A: Agent<E>>(agent: &mut A, elite: &EliteBatch<E>) -> Result<Option<Record>> {
        if elite.is_empty() {
            warn!("no episode reached the reward bound; skipping update");
            return Ok(None);
        }
        agent.opt(elite).map(Some)
    }

    /// Runs the loop until convergence (or `max_opts`).
    ///
    /// Emits `loss`, `reward_bound` and `reward_mean` per iteration through
    /// `recorder`, keyed by the iteration counter `opt_steps`.
    pub fn train<A: Agent<E>>(&mut self, agent: &mut A, recorder: &mut dyn Recorder) -> Result<()> {
        let env = E::build(&self.env_config, self.seed)?;
        let mut sampler = BatchSampler::new(env, self.batch_size);
        let mut opt_steps: usize = 0;

        loop {
            self.state = TrainerState::Sampling;
            let batch = sampler.sample_batch(agent)?;

            self.state = TrainerState::Selecting;
            let elite = filter_batch(&batch, self.percentile);

            self.state = TrainerState::Updating;
            opt_steps += 1;
            let mut record = Record::empty();
            record.insert("opt_steps", Scalar(opt_steps as f32));
            record.insert("reward_bound", Scalar(elite.reward_bound));
            record.insert("reward_mean", Scalar(elite.reward_mean));
            if let Some(r) = Self::opt_step(agent, &elite)? {
                record = record.merge(r);
            }

            match record.get_scalar("loss") {
                Ok(loss) => info!(
                    "{}: loss={:.5}, reward_mean={:.1}, rw_bound={:.1}",
                    opt_steps, loss, elite.reward_mean, elite.reward_bound
                ),
                Err(_) => info!(
                    "{}: update skipped, reward_mean={:.1}, rw_bound={:.1}",
                    opt_steps, elite.reward_mean, elite.reward_bound
                ),
            }

            recorder.store(record);
            if opt_steps % self.flush_records_interval == 0 {
                recorder.flush(opt_steps as _);
            }

            if elite.reward_mean > self.solved_reward {
                self.state = TrainerState::Converged;
                info!(
                    "solved: reward_mean={:.1} after {} iterations",
                    elite.reward_mean, opt_steps
                );
                break;
            }
            if self.max_opts > 0 && opt_steps >= self.max_opts {
                warn!("reached max_opts={} before solving", self.max_opts);
                break;
            }
        }

        if opt_steps % self.flush_records_interval != 0 {
            recorder.flush(opt_steps as _);
        }
        Ok(())
    }
}
