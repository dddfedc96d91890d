//! The immutable command record.
//!
//! # Wire shape
//!
//! ```json
//! { "agentId": "alpha", "kind": "MOVE", "direction": { "x": 1, "y": 0 } }
//! ```
//!
//! The field names of the original recordings are accepted too: `UAVId` for
//! the agent, `command` for the kind, and a direction nested under `data`.
//! Direction components may be spelled `dx`/`dz` or `x`/`y`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CommandError, CommandResult};

// ── CommandKind ───────────────────────────────────────────────────────────────

/// What a command asks the agent to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CommandKind {
    /// Climb to cruise altitude above the current ground position.
    #[serde(alias = "takeoff")]
    Takeoff,
    /// Descend to ground-clearance altitude at the current ground position.
    #[serde(alias = "land")]
    Land,
    /// Fly to the centre of the cell `direction` away from the last commanded cell.
    #[serde(alias = "move")]
    Move,
    /// Any kind this build does not know.  Executes as "hold position".
    #[serde(other)]
    Unrecognized,
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CommandKind::Takeoff      => "TAKEOFF",
            CommandKind::Land         => "LAND",
            CommandKind::Move         => "MOVE",
            CommandKind::Unrecognized => "UNRECOGNIZED",
        })
    }
}

impl FromStr for CommandKind {
    type Err = std::convert::Infallible;

    /// Case-insensitive.  Unknown names map to [`CommandKind::Unrecognized`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_uppercase().as_str() {
            "TAKEOFF" => CommandKind::Takeoff,
            "LAND"    => CommandKind::Land,
            "MOVE"    => CommandKind::Move,
            _         => CommandKind::Unrecognized,
        })
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// A relative grid offset carried by `MOVE`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    #[serde(alias = "x")]
    pub dx: i32,
    #[serde(alias = "y", alias = "z")]
    pub dz: i32,
}

impl Direction {
    #[inline]
    pub fn new(dx: i32, dz: i32) -> Self {
        Self { dx, dz }
    }
}

// ── Command ───────────────────────────────────────────────────────────────────

/// One instruction addressed to one agent by name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawCommand")]
pub struct Command {
    pub agent_id:  String,
    pub kind:      CommandKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

impl Command {
    pub fn new(agent_id: impl Into<String>, kind: CommandKind, direction: Option<Direction>) -> Self {
        Self { agent_id: agent_id.into(), kind, direction }
    }

    pub fn takeoff(agent_id: impl Into<String>) -> Self {
        Self::new(agent_id, CommandKind::Takeoff, None)
    }

    pub fn land(agent_id: impl Into<String>) -> Self {
        Self::new(agent_id, CommandKind::Land, None)
    }

    pub fn move_by(agent_id: impl Into<String>, dx: i32, dz: i32) -> Self {
        Self::new(agent_id, CommandKind::Move, Some(Direction::new(dx, dz)))
    }

    /// The direction of a `MOVE`.
    ///
    /// # Errors
    ///
    /// [`CommandError::MissingDirection`] if the payload is absent.
    pub fn move_direction(&self) -> CommandResult<Direction> {
        self.direction.ok_or_else(|| CommandError::MissingDirection {
            agent: self.agent_id.clone(),
        })
    }

    /// Check the payload contract without executing the command.
    pub fn validate(&self) -> CommandResult<()> {
        match self.kind {
            CommandKind::Move => self.move_direction().map(|_| ()),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Some(d) => write!(f, "{}:{}({}, {})", self.agent_id, self.kind, d.dx, d.dz),
            None    => write!(f, "{}:{}", self.agent_id, self.kind),
        }
    }
}

// ── Deserialisation shim ──────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCommand {
    #[serde(alias = "UAVId", alias = "uavId")]
    agent_id:  String,
    #[serde(alias = "command")]
    kind:      CommandKind,
    #[serde(default)]
    direction: Option<Direction>,
    #[serde(default)]
    data:      Option<RawCommandData>,
}

#[derive(Deserialize)]
struct RawCommandData {
    #[serde(default)]
    direction: Option<Direction>,
}

impl From<RawCommand> for Command {
    fn from(raw: RawCommand) -> Self {
        let direction = raw.direction.or(raw.data.and_then(|d| d.direction));
        Command { agent_id: raw.agent_id, kind: raw.kind, direction }
    }
}
