use thiserror::Error;
use uav_agent::AgentError;
use uav_core::CoreError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("scheduler configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("fleet error: {0}")]
    Agent(#[from] AgentError),
}

pub type SimResult<T> = Result<T, SimError>;
