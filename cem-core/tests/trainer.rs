use anyhow::Result;
use cem_core::dummy::{DummyAct, DummyObs, ScriptedConfig, ScriptedEnv};
use cem_core::record::{BufferedRecorder, Record};
use cem_core::{
    filter_batch, Agent, BatchSampler, EliteBatch, Env, Policy, Trainer, TrainerConfig,
    TrainerState,
};
use std::path::Path;
use std::sync::atomic::Ordering;

/// An agent that never learns but counts what the trainer asks of it.
struct CountingAgent {
    samples: usize,
    opt_calls: usize,
}

impl CountingAgent {
    fn new() -> Self {
        Self {
            samples: 0,
            opt_calls: 0,
        }
    }
}

impl Policy<ScriptedEnv> for CountingAgent {
    fn sample(&mut self, _obs: &DummyObs) -> DummyAct {
        self.samples += 1;
        DummyAct(self.samples % 2)
    }
}

impl Agent<ScriptedEnv> for CountingAgent {
    fn opt(&mut self, elite: &EliteBatch<ScriptedEnv>) -> Result<Record> {
        assert!(!elite.is_empty(), "trainer must skip empty elite sets");
        self.opt_calls += 1;
        Ok(Record::from_scalar("loss", 0.25))
    }

    fn save_params(&self, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn load_params(&mut self, _path: &Path) -> Result<()> {
        Ok(())
    }
}

#[test]
fn converges_and_stops_pulling_batches() {
    // Every episode is worth 10, well above the solved threshold, so the
    // first batch must be the last one.
    let env_config = ScriptedConfig::new(vec![1, 2, 3, 4], vec![10.0, 10.0, 10.0, 10.0]);
    let config = TrainerConfig::default()
        .batch_size(4)
        .percentile(50.0)
        .solved_reward(5.0);
    let mut trainer = Trainer::<ScriptedEnv>::build(config, env_config.clone());
    let mut agent = CountingAgent::new();
    let mut recorder = BufferedRecorder::new();

    trainer.train(&mut agent, &mut recorder).unwrap();

    assert_eq!(trainer.state(), TrainerState::Converged);
    assert_eq!(agent.opt_calls, 1);
    // Exactly one batch was sampled: four episodes of lengths 1+2+3+4.
    assert_eq!(env_config.steps.load(Ordering::SeqCst), 10);
    assert_eq!(env_config.resets.load(Ordering::SeqCst), 4);
}

#[test]
fn records_carry_the_iteration_metrics() {
    let env_config = ScriptedConfig::new(vec![1, 2, 3, 4], vec![1.0, 2.0, 3.0, 4.0]);
    let config = TrainerConfig::default()
        .batch_size(4)
        .percentile(50.0)
        .solved_reward(f32::MAX)
        .max_opts(3);
    let mut trainer = Trainer::<ScriptedEnv>::build(config, env_config);
    let mut agent = CountingAgent::new();
    let mut recorder = BufferedRecorder::new();

    trainer.train(&mut agent, &mut recorder).unwrap();

    assert_ne!(trainer.state(), TrainerState::Converged);
    assert_eq!(agent.opt_calls, 3);
    assert_eq!(recorder.len(), 3);
    for record in recorder.iter() {
        assert!((record.get_scalar("reward_mean").unwrap() - 2.5).abs() < 1e-5);
        assert!((record.get_scalar("reward_bound").unwrap() - 2.5).abs() < 1e-5);
        assert_eq!(record.get_scalar("loss").unwrap(), 0.25);
    }
}

#[test]
fn sampled_batch_filters_to_the_expected_elite() {
    let env_config = ScriptedConfig::new(vec![1, 2, 3, 4], vec![1.0, 2.0, 3.0, 4.0]);
    let env = ScriptedEnv::build(&env_config, 0).unwrap();
    let mut sampler = BatchSampler::new(env, 4);
    let mut agent = CountingAgent::new();

    let batch = sampler.sample_batch(&mut agent).unwrap();
    let elite = filter_batch(&batch, 50.0);

    // The two episodes at or above the bound contribute 3 + 4 steps.
    assert!((elite.reward_bound - 2.5).abs() < 1e-5);
    assert!((elite.reward_mean - 2.5).abs() < 1e-5);
    assert_eq!(elite.len(), 7);
}

#[test]
fn empty_elite_set_skips_the_update() {
    let mut agent = CountingAgent::new();
    let elite: EliteBatch<ScriptedEnv> = EliteBatch {
        obs: vec![],
        acts: vec![],
        reward_bound: 31.0,
        reward_mean: 25.0,
    };

    let out = Trainer::<ScriptedEnv>::opt_step(&mut agent, &elite).unwrap();
    assert!(out.is_none());
    assert_eq!(agent.opt_calls, 0);
}

#[test]
fn non_empty_elite_set_updates_once() {
    let mut agent = CountingAgent::new();
    let elite: EliteBatch<ScriptedEnv> = EliteBatch {
        obs: vec![DummyObs::new(vec![0.0, 0.0])],
        acts: vec![DummyAct(1)],
        reward_bound: 2.5,
        reward_mean: 2.5,
    };

    let record = Trainer::<ScriptedEnv>::opt_step(&mut agent, &elite)
        .unwrap()
        .unwrap();
    assert_eq!(agent.opt_calls, 1);
    assert_eq!(record.get_scalar("loss").unwrap(), 0.25);
}
