use super::layout_tracker::LayoutTracker;
use crate::domain::errors::{ConfigResult, LayoutResult};
use crate::domain::events::{EventDispatcher, InMemoryEventDispatcher, ViewportEvent};
use crate::domain::flame_chart::{
    ContainerGeometry, ContentExtent, CssPixels, FlameChartViewport, FrameScheduler, LayoutSource,
    Milliseconds, ProfileSelection, ResolvedViewport, SelectionStore, TimeRange, ViewportConfig,
    WheelInput,
};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_trace, log_warn};
use std::cell::RefCell;
use std::rc::Rc;

const COMPONENT: LogComponent = LogComponent::Application("ViewportController");

/// Application service driving one flame chart panel.
///
/// Owns the [`FlameChartViewport`] entity, forwards every horizontal change
/// to the [`SelectionStore`] and publishes a [`ResolvedViewport`] to
/// subscribers whenever the visible window changes.
///
/// The store may call back into the controller synchronously (the host
/// re-renders with the new selection), so no borrow of the entity is held
/// while the store or a subscriber runs.
pub struct ViewportController {
    viewport: RefCell<FlameChartViewport>,
    store: Rc<dyn SelectionStore>,
    layout: Rc<LayoutTracker>,
    dispatcher: RefCell<InMemoryEventDispatcher>,
}

impl ViewportController {
    pub fn new(
        config: ViewportConfig,
        time_range: TimeRange,
        store: Rc<dyn SelectionStore>,
        scheduler: Rc<dyn FrameScheduler>,
    ) -> ConfigResult<Rc<Self>> {
        config.validate()?;
        let viewport = FlameChartViewport::new(config, store.selection(), time_range);
        log_debug!(
            COMPONENT,
            "created for [{:.3}, {:.3}] ms",
            time_range.start,
            time_range.end
        );
        Ok(Rc::new(Self {
            viewport: RefCell::new(viewport),
            store,
            layout: Rc::new(LayoutTracker::new(scheduler)),
            dispatcher: RefCell::new(InMemoryEventDispatcher::new()),
        }))
    }

    pub fn subscribe<F>(&self, handler: F)
    where
        F: Fn(&ViewportEvent) + 'static,
    {
        self.dispatcher.borrow_mut().subscribe_to_viewport_events(handler);
    }

    pub fn resolved(&self) -> ResolvedViewport {
        self.viewport.borrow().resolved()
    }

    /// Snapshot of the entity.
    pub fn viewport(&self) -> FlameChartViewport {
        self.viewport.borrow().clone()
    }

    pub fn is_dragging(&self) -> bool {
        self.viewport.borrow().is_dragging()
    }

    pub fn is_expanded(&self) -> bool {
        self.viewport.borrow().is_expanded()
    }

    // ---- lifecycle ----

    /// Attach the container and queue the first measurement.
    pub fn mount(self: &Rc<Self>, source: Rc<dyn LayoutSource>) {
        self.layout.attach(source);
        self.request_measure();
    }

    /// Unmount: stop measuring and end any drag in progress.
    pub fn teardown(&self) {
        self.layout.detach();
        if self.viewport.borrow_mut().pointer_up() {
            self.publish(ViewportEvent::DragEnded);
        }
        log_debug!(COMPONENT, "torn down");
    }

    /// Queue a re-measure on the next frame, superseding a pending one.
    pub fn request_measure(self: &Rc<Self>) {
        let controller = Rc::downgrade(self);
        self.layout.schedule(move |result| {
            if let Some(controller) = controller.upgrade() {
                controller.on_measured(result);
            }
        });
    }

    fn on_measured(&self, result: LayoutResult<ContainerGeometry>) {
        match result {
            Ok(geometry) => {
                self.apply_measurement(geometry);
            }
            Err(err) => {
                log_warn!(COMPONENT, "measurement skipped: {}", err);
            }
        }
    }

    /// Store a measured container box. Returns false when it did not change.
    pub fn apply_measurement(&self, geometry: ContainerGeometry) -> bool {
        let changed = self.viewport.borrow_mut().apply_measurement(geometry);
        if changed {
            log_trace!(
                COMPONENT,
                "container {}x{} at {}",
                geometry.width,
                geometry.height,
                geometry.left
            );
            self.publish(ViewportEvent::LayoutMeasured(geometry));
            self.publish_changed();
        }
        changed
    }

    // ---- external state ----

    /// The host re-rendered with a (possibly) new selection and time range.
    pub fn receive_props(&self, selection: ProfileSelection, time_range: TimeRange) -> bool {
        let changed = self.viewport.borrow_mut().receive_props(selection, time_range);
        if changed {
            self.publish_changed();
        }
        changed
    }

    /// The store committed a new selection.
    pub fn on_selection_changed(&self, selection: ProfileSelection) -> bool {
        let time_range = self.viewport.borrow().time_range();
        self.receive_props(selection, time_range)
    }

    /// The profile's time range changed; the store's selection is re-read.
    pub fn set_time_range(&self, time_range: TimeRange) -> bool {
        let selection = self.store.selection();
        self.receive_props(selection, time_range)
    }

    /// New stack-timing content. Scrolls back to the top and re-measures.
    pub fn set_content(self: &Rc<Self>, content: ContentExtent) -> bool {
        let changed = self.viewport.borrow_mut().set_content(content);
        if changed {
            log_debug!(
                COMPONENT,
                "content changed: depth {}, height {}",
                content.max_stack_depth,
                content.max_viewport_height
            );
            self.publish_changed();
            self.request_measure();
        }
        changed
    }

    pub fn set_expanded(&self, is_expanded: bool) -> bool {
        let changed = self.viewport.borrow_mut().set_expanded(is_expanded);
        if changed {
            self.publish_changed();
        }
        changed
    }

    // ---- input ----

    /// Wheel zoom. Returns true when the panel consumed the event and the
    /// host should suppress the page's default scroll.
    pub fn handle_wheel(&self, input: WheelInput) -> bool {
        let (consumed, update) = {
            let viewport = self.viewport.borrow();
            (viewport.is_expanded(), viewport.zoom(input))
        };
        if let Some(selection) = update {
            self.dispatch(selection);
        }
        consumed
    }

    pub fn handle_pointer_down(&self, x: CssPixels, y: CssPixels) {
        self.viewport.borrow_mut().pointer_down(x, y);
        log_trace!(COMPONENT, "drag started at ({}, {})", x, y);
        self.publish(ViewportEvent::DragStarted);
        self.publish_changed();
    }

    pub fn handle_pointer_move(&self, x: CssPixels, y: CssPixels) {
        let (before, update) = {
            let mut viewport = self.viewport.borrow_mut();
            let before = viewport.vertical();
            (before, viewport.pointer_move(x, y))
        };
        let Some(selection) = update else {
            return;
        };
        if self.viewport.borrow().vertical() != before {
            self.publish_changed();
        }
        self.dispatch(selection);
    }

    pub fn handle_pointer_up(&self) {
        let was_dragging = self.viewport.borrow_mut().pointer_up();
        if was_dragging {
            log_trace!(COMPONENT, "drag ended");
            self.publish(ViewportEvent::DragEnded);
            self.publish_changed();
        }
    }

    // ---- queries ----

    pub fn time_at_pixel(&self, client_x: CssPixels) -> Option<Milliseconds> {
        self.viewport.borrow().time_at_pixel(client_x)
    }

    pub fn pixel_at_time(&self, time: Milliseconds) -> CssPixels {
        self.viewport.borrow().pixel_at_time(time)
    }

    fn dispatch(&self, selection: ProfileSelection) {
        log_debug!(COMPONENT, "dispatching {:?}", selection.bounds());
        self.publish(ViewportEvent::SelectionDispatched(selection));
        self.store.update_profile_selection(selection);
    }

    fn publish_changed(&self) {
        let resolved = self.resolved();
        self.publish(ViewportEvent::ViewportChanged(resolved));
    }

    fn publish(&self, event: ViewportEvent) {
        self.dispatcher.borrow().publish_viewport_event(event);
    }
}
