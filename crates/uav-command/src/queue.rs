//! `CommandQueue` — one agent's ordered, append-only command list.

use crate::Command;

/// Commands addressed to a single agent, in submission order.
///
/// The command at index `n` executes during step `n`.  Queues only grow
/// during a run; resubmission appends onto the existing tail.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandQueue {
    commands: Vec<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// The command scheduled for step index `step`, if the queue is that long.
    #[inline]
    pub fn get(&self, step: usize) -> Option<&Command> {
        self.commands.get(step)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }
}

impl<'a> IntoIterator for &'a CommandQueue {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
