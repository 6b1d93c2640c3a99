use super::CemAgentConfig;
use crate::{Mlp, Optimizer};
use anyhow::Result;
use candle_core::{DType, Device, Tensor, D};
use candle_nn::{loss::cross_entropy, ops::softmax, VarBuilder, VarMap};
use cem_core::error::CemError;
use cem_core::record::Record;
use cem_core::util::sample_weighted;
use cem_core::{Act, Agent, EliteBatch, Env, Obs, Policy};
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::marker::PhantomData;
use std::path::Path;

/// Stochastic policy over a discrete action set, trainable with the
/// cross-entropy method.
///
/// The policy network maps an observation to unnormalized action scores;
/// sampling normalizes them with a softmax and draws an action from the
/// resulting distribution through the centralized weighted-sampling
/// routine, seeded from the config. The only mutable state across calls
/// is the learnable parameters (and the RNG); repeated calls with the
/// same parameters are distribution-identical.
pub struct CemAgent<E: Env> {
    mlp: Mlp,
    varmap: VarMap,
    opt: Optimizer,
    rng: SmallRng,
    device: Device,
    phantom: PhantomData<fn() -> E>,
}

impl<E: Env> CemAgent<E> {
    /// Builds the agent on the CPU device.
    pub fn build(config: CemAgentConfig) -> Result<Self> {
        let device = Device::Cpu;
        let varmap = VarMap::new();
        let vs = VarBuilder::from_varmap(&varmap, DType::F32, &device);
        let mlp = Mlp::build(vs, &config.mlp)?;
        let opt = config.opt.build(varmap.all_vars())?;
        Ok(Self {
            mlp,
            varmap,
            opt,
            rng: SmallRng::seed_from_u64(config.seed),
            device,
            phantom: PhantomData,
        })
    }

    /// The normalized action distribution for a single observation:
    /// non-negative probabilities summing to one.
    pub fn action_probs(&self, obs: &E::Obs) -> Result<Vec<f32>> {
        let xs = Tensor::from_slice(obs.as_slice(), (1, obs.dim()), &self.device)?;
        let logits = self.mlp.forward(&xs)?;
        let probs = softmax(&logits, D::Minus1)?.squeeze(0)?.to_vec1::<f32>()?;
        Ok(probs)
    }

    /// Stacks the elite observations into an `(n, obs_dim)` tensor and the
    /// elite actions into a `u32` label tensor.
    fn elite_tensors(&self, elite: &EliteBatch<E>) -> Result<(Tensor, Tensor)> {
        let obs_dim = elite.obs[0].dim();
        let mut flat = Vec::with_capacity(elite.len() * obs_dim);
        for obs in &elite.obs {
            flat.extend_from_slice(obs.as_slice());
        }
        let obs_v = Tensor::from_slice(&flat, (elite.len(), obs_dim), &self.device)?;

        let acts: Vec<u32> = elite.acts.iter().map(|a| a.index() as u32).collect();
        let acts_v = Tensor::from_slice(&acts, elite.len(), &self.device)?;
        Ok((obs_v, acts_v))
    }
}

impl<E: Env> Policy<E> for CemAgent<E> {
    /// Draws an action from the policy's distribution over `obs`.
    fn sample(&mut self, obs: &E::Obs) -> E::Act {
        let probs = self.action_probs(obs).expect("policy forward pass");
        E::Act::from_index(sample_weighted(&mut self.rng, &probs))
    }
}

impl<E: Env> Agent<E> for CemAgent<E> {
    /// One supervised step: cross-entropy between the network's action
    /// scores on the elite observations and the elite actions as integer
    /// targets, followed by a single optimizer step.
    fn opt(&mut self, elite: &EliteBatch<E>) -> Result<Record> {
        if elite.is_empty() {
            return Err(CemError::EmptyEliteSet.into());
        }
        let (obs_v, acts_v) = self.elite_tensors(elite)?;
        let logits = self.mlp.forward(&obs_v)?;
        let loss = cross_entropy(&logits, &acts_v)?;
        self.opt.backward_step(&loss)?;
        Ok(Record::from_scalar("loss", loss.to_scalar::<f32>()?))
    }

    fn save_params(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path)?;
        let file = path.join("policy.safetensors");
        self.varmap.save(&file)?;
        info!("saved policy parameters to {:?}", file);
        Ok(())
    }

    fn load_params(&mut self, path: &Path) -> Result<()> {
        let file = path.join("policy.safetensors");
        self.varmap.load(&file)?;
        info!("loaded policy parameters from {:?}", file);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MlpConfig, OptimizerConfig};
    use cem_core::dummy::{DummyAct, DummyObs, ScriptedEnv};
    use tempdir::TempDir;

    fn agent(seed: u64) -> CemAgent<ScriptedEnv> {
        let config = CemAgentConfig::new(
            MlpConfig::new(2, vec![16, 16], 2),
            OptimizerConfig::Adam { lr: 0.01 },
            seed,
        );
        CemAgent::build(config).unwrap()
    }

    #[test]
    fn action_probs_form_a_distribution() {
        let agent = agent(0);
        let probs = agent.action_probs(&DummyObs::new(vec![0.3, -1.2])).unwrap();
        assert_eq!(probs.len(), 2);
        assert!(probs.iter().all(|p| *p >= 0.0));
        assert!((probs.iter().sum::<f32>() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn sampled_actions_are_valid_indices() {
        let mut agent = agent(1);
        for i in 0..50 {
            let obs = DummyObs::new(vec![i as f32 * 0.1, -0.5]);
            let act: DummyAct = agent.sample(&obs);
            assert!(act.index() < 2);
        }
    }

    /// A tiny separable problem: action 0 left of the origin, action 1
    /// right of it.
    fn elite() -> EliteBatch<ScriptedEnv> {
        let obs = vec![
            DummyObs::new(vec![-1.0, 0.5]),
            DummyObs::new(vec![-0.6, -0.2]),
            DummyObs::new(vec![0.7, 0.1]),
            DummyObs::new(vec![1.2, -0.4]),
        ];
        let acts = vec![DummyAct(0), DummyAct(0), DummyAct(1), DummyAct(1)];
        EliteBatch {
            obs,
            acts,
            reward_bound: 1.0,
            reward_mean: 1.0,
        }
    }

    #[test]
    fn opt_returns_finite_loss_and_reduces_it() {
        let mut agent = agent(2);
        let elite = elite();

        let first = agent.opt(&elite).unwrap().get_scalar("loss").unwrap();
        assert!(first.is_finite());

        let mut last = first;
        for _ in 0..60 {
            last = agent.opt(&elite).unwrap().get_scalar("loss").unwrap();
        }
        assert!(last < first, "loss did not decrease: {} -> {}", first, last);
    }

    #[test]
    fn opt_on_empty_elite_set_is_an_error() {
        let mut agent = agent(3);
        let empty = EliteBatch {
            obs: vec![],
            acts: vec![],
            reward_bound: 0.0,
            reward_mean: 0.0,
        };
        let err = agent.opt(&empty).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CemError>(),
            Some(CemError::EmptyEliteSet)
        ));
    }

    #[test]
    fn params_roundtrip_through_save_and_load() {
        let dir = TempDir::new("cem_agent").unwrap();
        let obs = DummyObs::new(vec![0.4, -0.9]);

        let saved = agent(4);
        let expected = saved.action_probs(&obs).unwrap();
        saved.save_params(dir.path()).unwrap();

        // A freshly built agent starts from different weights; loading
        // must overwrite them.
        let mut loaded = agent(5);
        loaded.load_params(dir.path()).unwrap();
        let actual = loaded.action_probs(&obs).unwrap();
        for (e, a) in expected.iter().zip(actual.iter()) {
            assert!((e - a).abs() < 1e-6);
        }
    }
}
