//! Command batch loaders.
//!
//! # JSON format
//!
//! A top-level array of commands (see [`Command`] for the accepted shapes):
//!
//! ```json
//! [
//!   { "agentId": "alpha", "kind": "TAKEOFF" },
//!   { "agentId": "alpha", "kind": "MOVE", "direction": { "x": 1, "y": 0 } }
//! ]
//! ```
//!
//! # CSV format
//!
//! One row per command, in batch order.  `dx`/`dz` are left empty for
//! commands without a direction.
//!
//! ```csv
//! agent_id,kind,dx,dz
//! alpha,TAKEOFF,,
//! alpha,MOVE,1,0
//! alpha,LAND,,
//! ```
//!
//! A row with exactly one of `dx`/`dz` set is rejected.  Unknown kinds load
//! as [`CommandKind::Unrecognized`] and are handled at execution time.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{Command, CommandError, CommandKind, CommandResult, Direction};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CommandRecord {
    agent_id: String,
    kind:     String,
    dx:       Option<i32>,
    dz:       Option<i32>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load an ordered command batch from a JSON file.
pub fn load_commands_json(path: &Path) -> CommandResult<Vec<Command>> {
    let file = std::fs::File::open(path)?;
    load_commands_json_reader(std::io::BufReader::new(file))
}

/// Like [`load_commands_json`] but accepts any `Read` source.
pub fn load_commands_json_reader<R: Read>(reader: R) -> CommandResult<Vec<Command>> {
    serde_json::from_reader(reader).map_err(|e| CommandError::Parse(e.to_string()))
}

/// Load an ordered command batch from a CSV file.
pub fn load_commands_csv(path: &Path) -> CommandResult<Vec<Command>> {
    let file = std::fs::File::open(path)?;
    load_commands_csv_reader(file)
}

/// Like [`load_commands_csv`] but accepts any `Read` source.
pub fn load_commands_csv_reader<R: Read>(reader: R) -> CommandResult<Vec<Command>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    csv_reader
        .deserialize::<CommandRecord>()
        .enumerate()
        .map(|(i, result)| {
            let row = result.map_err(|e| CommandError::Parse(e.to_string()))?;
            let direction = match (row.dx, row.dz) {
                (Some(dx), Some(dz)) => Some(Direction::new(dx, dz)),
                (None, None) => None,
                _ => {
                    return Err(CommandError::Parse(format!(
                        "row {}: dx and dz must be given together",
                        i + 1
                    )));
                }
            };
            let kind: CommandKind = row.kind.parse().unwrap_or(CommandKind::Unrecognized);
            Ok(Command::new(row.agent_id, kind, direction))
        })
        .collect()
}
