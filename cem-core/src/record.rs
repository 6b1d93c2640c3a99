//! Records of training metrics and recorders that consume them.
//!
//! Each training iteration produces a [`Record`], a small key-value map of
//! named scalars (`loss`, `reward_bound`, `reward_mean`, ...). Records flow
//! into a [`Recorder`], which is a pure side channel: nothing it does feeds
//! back into the training loop. [`NullRecorder`] discards everything,
//! [`BufferedRecorder`] keeps records in memory (useful in tests), and the
//! tensorboard backend lives in its own crate.
mod base;
mod buffered_recorder;
mod null_recorder;
mod recorder;
mod storage;

pub use base::{Record, RecordValue};
pub use buffered_recorder::BufferedRecorder;
pub use null_recorder::NullRecorder;
pub use recorder::Recorder;
pub use storage::RecordStorage;
