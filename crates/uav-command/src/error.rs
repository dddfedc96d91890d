use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    /// A `MOVE` command was built or loaded without its direction payload.
    #[error("MOVE command for {agent:?} has no direction")]
    MissingDirection { agent: String },

    #[error("command parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CommandResult<T> = Result<T, CommandError>;
