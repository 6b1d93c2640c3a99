#![warn(missing_docs)]
//! Core of the cross-entropy-method policy trainer.
//!
//! The pieces fit together in one direction: a [`Policy`] proposes actions,
//! a [`BatchSampler`] unrolls episodes into fixed-size batches,
//! [`filter_batch`] keeps the (observation, action) pairs of the episodes
//! above the reward percentile, and the [`Trainer`] performs one supervised
//! step of an [`Agent`] on those pairs before pulling the next batch.
pub mod dummy;
pub mod error;
pub mod record;
pub mod util;

mod base;
pub use base::{Act, Agent, Batch, Env, EnvDescription, Episode, EpisodeStep, Obs, Policy, Step};

mod sampler;
pub use sampler::BatchSampler;

mod select;
pub use select::{filter_batch, EliteBatch};

mod trainer;
pub use trainer::{Trainer, TrainerConfig, TrainerState};
