//! Errors in the library.
use thiserror::Error;

/// Errors raised by the training pipeline.
///
/// Every error here is fatal and terminates the run, with one exception:
/// an empty elite set is recovered by skipping the optimization step for
/// that iteration. There is no retry policy anywhere in the loop.
#[derive(Error, Debug)]
pub enum CemError {
    /// The environment was stepped after the episode ended, without an
    /// intervening reset.
    #[error("environment stepped after episode end without reset")]
    EnvironmentMisuse,

    /// A batch did not match the expected size or structure.
    #[error("malformed batch: {0}")]
    MalformedBatch(String),

    /// An optimization step was requested on an empty elite set.
    #[error("optimization step requested on an empty elite set")]
    EmptyEliteSet,

    /// Record value type error.
    #[error("record value type error: {0}")]
    RecordValueTypeError(String),
}
