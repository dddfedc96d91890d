//! `Fleet` — the registry of every UAV in a run.
//!
//! UAVs live in a dense `Vec` indexed by `AgentId` so per-frame passes are a
//! straight slice walk.  Commands address UAVs by name, so a side index maps
//! names to ids.

#[cfg(not(feature = "fx-hash"))]
use std::collections::HashMap;

#[cfg(feature = "fx-hash")]
use rustc_hash::FxHashMap as HashMap;

use uav_core::AgentId;

use crate::{AgentError, AgentResult, Uav};

/// Every UAV in the simulation, in configuration order.
#[derive(Clone, Debug, Default)]
pub struct Fleet {
    uavs:    Vec<Uav>,
    by_name: HashMap<String, AgentId>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `uav`, which must carry the next dense id (`AgentId(len)`).
    ///
    /// # Errors
    ///
    /// [`AgentError::DuplicateName`] if a UAV with the same name exists.
    pub(crate) fn insert(&mut self, uav: Uav) -> AgentResult<AgentId> {
        debug_assert_eq!(uav.id().index(), self.uavs.len(), "fleet ids must be dense");
        if self.by_name.contains_key(uav.name()) {
            return Err(AgentError::DuplicateName(uav.name().to_owned()));
        }
        let id = uav.id();
        self.by_name.insert(uav.name().to_owned(), id);
        self.uavs.push(uav);
        Ok(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.uavs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.uavs.is_empty()
    }

    /// Resolve a command's agent name.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<AgentId> {
        self.by_name.get(name).copied()
    }

    #[inline]
    pub fn get(&self, id: AgentId) -> Option<&Uav> {
        self.uavs.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Uav> {
        self.uavs.get_mut(id.index())
    }

    pub fn by_name(&self, name: &str) -> Option<&Uav> {
        self.lookup(name).and_then(|id| self.get(id))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Uav> {
        self.uavs.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Uav> {
        self.uavs.iter_mut()
    }

    /// Length of the longest command queue (0 for an empty fleet).
    pub fn longest_queue(&self) -> usize {
        self.uavs.iter().map(|u| u.queue().len()).max().unwrap_or(0)
    }
}
