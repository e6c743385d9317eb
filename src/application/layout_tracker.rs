use crate::domain::errors::{LayoutResult, ViewportError};
use crate::domain::flame_chart::{ContainerGeometry, FrameScheduler, LayoutSource};
use std::cell::RefCell;
use std::rc::Rc;

/// Deferred container measurement.
///
/// Measurement is never done synchronously on a layout-affecting change: it
/// is queued on the frame scheduler and reads the live box when the frame
/// runs. A request issued while another is still pending replaces it.
pub struct LayoutTracker {
    source: RefCell<Option<Rc<dyn LayoutSource>>>,
    scheduler: Rc<dyn FrameScheduler>,
}

impl LayoutTracker {
    pub fn new(scheduler: Rc<dyn FrameScheduler>) -> Self {
        Self { source: RefCell::new(None), scheduler }
    }

    /// Bind the container to measure (mount).
    pub fn attach(&self, source: Rc<dyn LayoutSource>) {
        *self.source.borrow_mut() = Some(source);
    }

    /// Forget the container (unmount) and drop any queued measurement.
    pub fn detach(&self) {
        self.source.borrow_mut().take();
        self.scheduler.cancel_frame();
    }

    pub fn is_attached(&self) -> bool {
        self.source.borrow().is_some()
    }

    /// Read the container box right now.
    pub fn measure(&self) -> LayoutResult<ContainerGeometry> {
        let source = self.source.borrow().clone();
        match source {
            Some(source) => source.measure(),
            None => Err(ViewportError::LayoutUnavailable("no container attached".to_string())),
        }
    }

    /// Measure on the next frame and hand the result to `on_measured`.
    pub fn schedule<F>(self: &Rc<Self>, on_measured: F)
    where
        F: FnOnce(LayoutResult<ContainerGeometry>) + 'static,
    {
        let tracker = Rc::downgrade(self);
        self.scheduler.request_frame(Box::new(move || {
            let result = match tracker.upgrade() {
                Some(tracker) => tracker.measure(),
                None => Err(ViewportError::LayoutUnavailable("layout tracker dropped".to_string())),
            };
            on_measured(result);
        }));
    }
}
