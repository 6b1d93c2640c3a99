use anyhow::Result;
use cem_core::{Env, Policy};
use cem_env::{CartPoleAct, CartPoleConfig, CartPoleEnv, CartPoleObs};

/// Picks either action with equal probability, ignoring the observation.
struct RandomPolicy {}

impl Policy<CartPoleEnv> for RandomPolicy {
    fn sample(&mut self, _: &CartPoleObs) -> CartPoleAct {
        CartPoleAct(fastrand::usize(..2))
    }
}

fn main() -> Result<()> {
    env_logger::init();
    fastrand::seed(42);

    let mut env = CartPoleEnv::build(&CartPoleConfig::default(), 42)?;
    let mut policy = RandomPolicy {};

    let mut obs = env.reset()?;
    let mut total_reward = 0.0;
    let mut total_steps = 0;
    loop {
        let act = policy.sample(&obs);
        let step = env.step(&act)?;
        total_reward += step.reward;
        total_steps += 1;
        if step.is_done() {
            break;
        }
        obs = step.obs;
    }

    println!("reward = {:.2} -- steps = {}", total_reward, total_steps);
    Ok(())
}
