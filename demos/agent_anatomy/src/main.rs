use anyhow::Result;
use cem_core::Env;
use cem_env::{CountdownAct, CountdownConfig, CountdownEnv};

/// The smallest possible agent: pick a random action, keep the reward.
struct Agent {
    total_reward: f32,
}

impl Agent {
    fn step(&mut self, env: &mut CountdownEnv) -> Result<bool> {
        let act = CountdownAct(fastrand::usize(..2));
        let step = env.step(&act)?;
        self.total_reward += step.reward;
        Ok(step.is_done())
    }
}

fn main() -> Result<()> {
    env_logger::init();
    fastrand::seed(42);

    let mut env = CountdownEnv::build(&CountdownConfig::default(), 42)?;
    env.reset()?;
    let mut agent = Agent { total_reward: 0.0 };

    while !agent.step(&mut env)? {}
    println!("total reward : {:.2}", agent.total_reward);
    Ok(())
}
