//! `uav-command` — command records, per-agent queues, and batch loading.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`command`]   | `Command`, `CommandKind`, `Direction`                     |
//! | [`queue`]     | `CommandQueue` (append-only, indexed by step)             |
//! | [`loader`]    | `load_commands_json*`, `load_commands_csv*`               |
//! | [`error`]     | `CommandError`, `CommandResult<T>`                        |
//!
//! # Sequencing model
//!
//! Commands carry no timestamp.  A batch is an ordered list; each command is
//! appended to the queue of the agent it names, and its execution step is its
//! index in *that* queue:
//!
//! ```text
//! batch:  [A:TAKEOFF, B:TAKEOFF, A:MOVE(1,0)]
//! A.queue = [TAKEOFF, MOVE(1,0)]   → steps 0, 1
//! B.queue = [TAKEOFF]              → step 0
//! ```
//!
//! Interleaving commands for different agents in the batch is cosmetic.

pub mod command;
pub mod error;
pub mod loader;
pub mod queue;

#[cfg(test)]
mod tests;

pub use command::{Command, CommandKind, Direction};
pub use error::{CommandError, CommandResult};
pub use loader::{
    load_commands_csv, load_commands_csv_reader, load_commands_json, load_commands_json_reader,
};
pub use queue::CommandQueue;
