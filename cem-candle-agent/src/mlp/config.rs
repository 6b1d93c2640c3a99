use serde::{Deserialize, Serialize};

/// Configuration of [`Mlp`](super::Mlp).
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
pub struct MlpConfig {
    /// Input dimension, the observation length.
    pub in_dim: usize,

    /// Hidden layer widths.
    pub units: Vec<usize>,

    /// Output dimension, the number of actions.
    pub out_dim: usize,
}

impl MlpConfig {
    /// Creates an MLP configuration.
    pub fn new(in_dim: usize, units: Vec<usize>, out_dim: usize) -> Self {
        Self {
            in_dim,
            units,
            out_dim,
        }
    }
}
