//! `uav-sim` — the command-step scheduler for the uav_grid simulator.
//!
//! # Frame protocol
//!
//! The host calls [`Scheduler::submit_commands`] once, then
//! [`Scheduler::advance`] every rendered frame:
//!
//! ```text
//! advance(frame_ms):
//!   ① Delta     — wall-clock time since the previous frame.
//!   ② Pause     — while paused, the delta is excluded from the step clock
//!                 and nothing else happens.
//!   ③ Step      — if running and a full step length has elapsed, move to the
//!                 next step; reaching the longest queue ends the run.
//!   ④ Targets   — the first frame of each step recomputes every UAV's target
//!                 from the command at that step index (exactly once).
//!   ⑤ Motion    — every UAV closes part of the distance to its target,
//!                 scaled by the frame delta.  Runs after the run ends too.
//! ```
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`scheduler`] | `Scheduler`, `SubmitReport`                               |
//! | [`builder`]   | `SchedulerBuilder` — validated construction from config   |
//! | [`observer`]  | `SchedulerObserver` hooks, `NoopObserver`                 |
//! | [`view`]      | `AgentView`, `DisplayNode`, `PresentationAdapter`         |
//! | [`error`]     | `SimError`, `SimResult<T>`                                |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use uav_core::WorldConfig;
//! use uav_sim::{NoopObserver, SchedulerBuilder};
//!
//! let config = WorldConfig::from_json_path(path)?;
//! let mut sched = SchedulerBuilder::new(config).build()?;
//! sched.submit_commands(commands, &mut NoopObserver);
//! sched.run_until_idle(0.0, 1_000.0 / 60.0, 0, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod scheduler;
pub mod view;


pub use builder::SchedulerBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SchedulerObserver};
pub use scheduler::{Scheduler, SubmitReport};
pub use view::{AgentView, DisplayNode, PresentationAdapter};
