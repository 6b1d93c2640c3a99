#![warn(missing_docs)]
//! Candle implementation of the cross-entropy-method policy function.
//!
//! [`CemAgent`] wraps a small [`Mlp`] emitting action logits. Sampling
//! applies a softmax and draws from the resulting distribution; one
//! optimization step fits the network to the elite (observation, action)
//! pairs with a cross-entropy loss.
mod agent;
mod mlp;
mod opt;

pub use agent::{CemAgent, CemAgentConfig};
pub use mlp::{Mlp, MlpConfig};
pub use opt::{Optimizer, OptimizerConfig};
