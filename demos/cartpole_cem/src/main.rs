use anyhow::Result;
use cem_candle_agent::{CemAgent, CemAgentConfig, MlpConfig, OptimizerConfig};
use cem_core::{Env, Trainer, TrainerConfig, TrainerState};
use cem_env::{CartPoleConfig, CartPoleEnv};
use cem_tensorboard::TensorboardRecorder;
use clap::Parser;

const HIDDEN_SIZE: usize = 64;
const BATCH_SIZE: usize = 16;
const PERCENTILE: f64 = 70.0;
const LEARNING_RATE: f64 = 0.01;
const SOLVED_REWARD: f32 = 199.0;

/// Trains a cart-pole policy with the cross-entropy method.
#[derive(Parser)]
struct Args {
    /// Directory for tensorboard event files.
    #[arg(long, default_value = "tensorboard/cartpole_cem")]
    logdir: String,

    /// Random seed for the environment and the policy.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    let args = Args::parse();

    let env_config = CartPoleConfig::default();
    let desc = CartPoleEnv::build(&env_config, args.seed)?.description();

    let agent_config = CemAgentConfig::new(
        MlpConfig::new(desc.obs_dim, vec![HIDDEN_SIZE, HIDDEN_SIZE], desc.n_actions),
        OptimizerConfig::Adam { lr: LEARNING_RATE },
        args.seed,
    );
    let mut agent = CemAgent::<CartPoleEnv>::build(agent_config)?;

    let trainer_config = TrainerConfig::default()
        .batch_size(BATCH_SIZE)
        .percentile(PERCENTILE)
        .solved_reward(SOLVED_REWARD)
        .seed(args.seed);
    let mut trainer = Trainer::<CartPoleEnv>::build(trainer_config, env_config);

    let mut recorder = TensorboardRecorder::new(&args.logdir);
    trainer.train(&mut agent, &mut recorder)?;

    if trainer.state() == TrainerState::Converged {
        println!("Solved!");
    }
    Ok(())
}
