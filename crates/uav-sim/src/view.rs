//! Read-only UAV snapshots and the seam to a host's display graph.
//!
//! The scheduler never touches rendering state.  A host that keeps one scene
//! node per UAV implements [`DisplayNode`] for it and lets a
//! [`PresentationAdapter`] copy positions and headings across each frame.

use uav_agent::Uav;
use uav_core::{AgentId, Cell, Vec3};

use crate::Scheduler;

// ── AgentView ─────────────────────────────────────────────────────────────────

/// Snapshot of one UAV as seen by the presentation layer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentView<'a> {
    pub id:       AgentId,
    pub name:     &'a str,
    pub cell:     Cell,
    pub position: Vec3,
    pub target:   Vec3,
    /// Yaw in radians.
    pub heading:  f32,
}

impl<'a> From<&'a Uav> for AgentView<'a> {
    fn from(uav: &'a Uav) -> Self {
        Self {
            id:       uav.id(),
            name:     uav.name(),
            cell:     uav.cell(),
            position: uav.position(),
            target:   uav.target(),
            heading:  uav.heading(),
        }
    }
}

// ── DisplayNode ───────────────────────────────────────────────────────────────

/// A host-side scene node that mirrors one UAV.
pub trait DisplayNode {
    fn set_position(&mut self, position: Vec3);

    /// Yaw in radians about the vertical axis, `0` facing `+z`.
    fn set_heading(&mut self, heading: f32);
}

// ── PresentationAdapter ───────────────────────────────────────────────────────

/// Pairs each UAV (by `AgentId`) with a display node and syncs them per frame.
pub struct PresentationAdapter<N: DisplayNode> {
    nodes: Vec<N>,
}

impl<N: DisplayNode> PresentationAdapter<N> {
    /// `nodes[i]` mirrors `AgentId(i)`.  Extra nodes are left alone; UAVs
    /// without a node are not displayed.
    pub fn new(nodes: Vec<N>) -> Self {
        Self { nodes }
    }

    /// Build one node per UAV with `make`.
    pub fn for_scheduler(scheduler: &Scheduler, mut make: impl FnMut(&AgentView<'_>) -> N) -> Self {
        Self { nodes: scheduler.views().map(|view| make(&view)).collect() }
    }

    /// Copy every UAV's position and heading onto its node.
    pub fn sync(&mut self, scheduler: &Scheduler) {
        for (node, view) in self.nodes.iter_mut().zip(scheduler.views()) {
            node.set_position(view.position);
            node.set_heading(view.heading);
        }
    }

    pub fn node(&self, id: AgentId) -> Option<&N> {
        self.nodes.get(id.index())
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }
}
