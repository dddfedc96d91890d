use thiserror::Error;

use uav_core::{AgentId, Step};

#[derive(Debug, Error)]
pub enum AgentError {
    /// A `MOVE` reached execution without a direction.  The UAV holds its
    /// previous target for the step.
    #[error("{agent} ({name}) missing command data for MOVE at {step}")]
    MissingCommandData {
        agent: AgentId,
        name:  String,
        step:  Step,
    },

    #[error("duplicate UAV name {0:?}")]
    DuplicateName(String),
}

pub type AgentResult<T> = Result<T, AgentError>;
