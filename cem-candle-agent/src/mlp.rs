//! Multilayer perceptron emitting action logits.
mod base;
mod config;

pub use base::Mlp;
pub use config::MlpConfig;
