use super::value_objects::{ContainerGeometry, ProfileSelection};
use crate::domain::errors::LayoutResult;

/// External owner of the canonical time-range selection, shared across panels.
pub trait SelectionStore {
    /// Current selection as last committed to the store.
    fn selection(&self) -> ProfileSelection;

    /// The only write channel to shared state.
    fn update_profile_selection(&self, selection: ProfileSelection);
}

/// Reads the on-screen box of the panel.
pub trait LayoutSource {
    fn measure(&self) -> LayoutResult<ContainerGeometry>;
}

pub type FrameTask = Box<dyn FnOnce()>;

/// Defers work to the next paint opportunity.
pub trait FrameScheduler {
    /// Queue `task`, superseding a task that has not run yet.
    fn request_frame(&self, task: FrameTask);

    /// Drop the queued task without running it.
    fn cancel_frame(&self);
}
