use super::MlpConfig;
use anyhow::Result;
use candle_core::{Device, Tensor};
use candle_nn::{linear, Linear, Module, VarBuilder};

/// Multilayer perceptron with ReLU activations and a linear output layer.
///
/// The final layer emits unnormalized action scores; normalization
/// (softmax) is applied by the caller at sampling time, not inside the
/// network, so the logits stay usable for the cross-entropy loss.
pub struct Mlp {
    layers: Vec<Linear>,
    device: Device,
}

impl Mlp {
    /// Builds the network, registering its weights under `vs`.
    pub fn build(vs: VarBuilder, config: &MlpConfig) -> Result<Self> {
        let device = vs.device().clone();
        let vs = vs.pp("mlp");

        let mut dims = Vec::with_capacity(config.units.len() + 2);
        dims.push(config.in_dim);
        dims.extend_from_slice(&config.units);
        dims.push(config.out_dim);

        let mut layers = Vec::with_capacity(dims.len() - 1);
        for (i, pair) in dims.windows(2).enumerate() {
            layers.push(linear(pair[0], pair[1], vs.pp(format!("ln{}", i)))?);
        }
        Ok(Self { layers, device })
    }

    /// Forward pass mapping `(n, in_dim)` observations to `(n, out_dim)`
    /// logits.
    pub fn forward(&self, xs: &Tensor) -> Result<Tensor> {
        let mut xs = xs.to_device(&self.device)?;
        let (hidden, last) = self.layers.split_at(self.layers.len() - 1);
        for layer in hidden {
            xs = layer.forward(&xs)?.relu()?;
        }
        Ok(last[0].forward(&xs)?)
    }
}
