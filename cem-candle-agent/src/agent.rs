//! The cross-entropy-method agent.
mod base;
mod config;

pub use base::CemAgent;
pub use config::CemAgentConfig;
