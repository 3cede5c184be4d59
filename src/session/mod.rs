//! Lazy viewer-session lifecycle management.
//!
//! Every result item gets one [`ViewerSlot`] (a placeholder region) the
//! moment its group is rendered; the slot stays inert until the user first
//! expands the group. [`GroupController::on_toggle`] then claims each slot
//! exactly once and returns one independent [`ActivationTask`] per slot —
//! fire-and-forget futures the caller spawns on its event loop. Sessions
//! are never torn down once created; collapsing a group is purely a
//! presentation concern.
//!
//! The whole module assumes a single-threaded, cooperative event loop (the
//! browser's). Slot handles are `Rc<RefCell<_>>` and backend futures are
//! not `Send`; the `mounted`/`expanded` flags would need atomic test-and-set
//! if activation ever moved to a worker.

mod backend;
mod controller;
mod slot;

pub use backend::{LoadOptions, LocalBoxFuture, ViewerBackend};
pub use controller::{ActivationTask, GroupController};
pub use slot::{SlotHandle, SlotKey, SlotRegistry, SlotStatus, ViewerSlot};
