use crate::domain::flame_chart::{ContainerGeometry, ProfileSelection, ResolvedViewport};
use std::fmt::Debug;

/// Base trait for all domain events
pub trait DomainEvent: Debug + Clone {
    fn event_type(&self) -> &'static str;
}

/// Events produced by a viewport controller
#[derive(Debug, Clone)]
pub enum ViewportEvent {
    /// The resolved window changed; renderers repaint from this.
    ViewportChanged(ResolvedViewport),
    SelectionDispatched(ProfileSelection),
    DragStarted,
    DragEnded,
    LayoutMeasured(ContainerGeometry),
}

impl DomainEvent for ViewportEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ViewportEvent::ViewportChanged(_) => "ViewportChanged",
            ViewportEvent::SelectionDispatched(_) => "SelectionDispatched",
            ViewportEvent::DragStarted => "DragStarted",
            ViewportEvent::DragEnded => "DragEnded",
            ViewportEvent::LayoutMeasured(_) => "LayoutMeasured",
        }
    }
}

/// Event dispatcher for publishing events
pub trait EventDispatcher {
    fn publish_viewport_event(&self, event: ViewportEvent);
}

/// Simple in-memory event dispatcher
#[derive(Default)]
pub struct InMemoryEventDispatcher {
    viewport_handlers: Vec<Box<dyn Fn(&ViewportEvent)>>,
}

impl InMemoryEventDispatcher {
    pub fn new() -> Self {
        Self { viewport_handlers: Vec::new() }
    }

    pub fn subscribe_to_viewport_events<F>(&mut self, handler: F)
    where
        F: Fn(&ViewportEvent) + 'static,
    {
        self.viewport_handlers.push(Box::new(handler));
    }
}

impl EventDispatcher for InMemoryEventDispatcher {
    fn publish_viewport_event(&self, event: ViewportEvent) {
        for handler in &self.viewport_handlers {
            handler(&event);
        }
    }
}
