#![allow(dead_code)]

use flame_chart_viewport::domain::errors::LayoutResult;
use flame_chart_viewport::infrastructure::{InMemorySelectionStore, QueuedFrameScheduler};
use flame_chart_viewport::{
    ContainerGeometry, ContentExtent, FlameChartViewport, LayoutSource, ProfileSelection,
    TimeRange, ViewportConfig, ViewportController, ViewportEvent,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub const WIDTH: f64 = 1000.0;
pub const HEIGHT: f64 = 500.0;

pub fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

pub fn assert_bounds(selection: ProfileSelection, start: f64, end: f64) {
    let (actual_start, actual_end) = selection.bounds().expect("selection has bounds");
    assert!(
        close(actual_start, start) && close(actual_end, end),
        "expected [{start}, {end}], got [{actual_start}, {actual_end}]"
    );
}

/// Entity over `[0, 1000]` ms, laid out at 1000x500 with tall content.
pub fn measured_viewport(selection: ProfileSelection) -> FlameChartViewport {
    let mut viewport =
        FlameChartViewport::new(ViewportConfig::default(), selection, TimeRange::new(0.0, 1000.0));
    viewport.set_content(ContentExtent::new(2000.0, 100));
    viewport.apply_measurement(ContainerGeometry::new(WIDTH, HEIGHT, 0.0));
    viewport
}

/// Layout source returning whatever geometry the test sets.
pub struct FixedLayout {
    geometry: Cell<ContainerGeometry>,
}

impl FixedLayout {
    pub fn new(geometry: ContainerGeometry) -> Rc<Self> {
        Rc::new(Self { geometry: Cell::new(geometry) })
    }

    pub fn set(&self, geometry: ContainerGeometry) {
        self.geometry.set(geometry);
    }
}

impl LayoutSource for FixedLayout {
    fn measure(&self) -> LayoutResult<ContainerGeometry> {
        Ok(self.geometry.get())
    }
}

/// A controller wired to an in-memory store that feeds every committed
/// selection straight back, the way a host re-renders.
pub struct Harness {
    pub controller: Rc<ViewportController>,
    pub store: Rc<InMemorySelectionStore>,
    pub scheduler: Rc<QueuedFrameScheduler>,
    pub layout: Rc<FixedLayout>,
    pub events: Rc<RefCell<Vec<ViewportEvent>>>,
}

impl Harness {
    pub fn new(config: ViewportConfig, selection: ProfileSelection) -> Self {
        let store = Rc::new(InMemorySelectionStore::new(selection));
        let scheduler = Rc::new(QueuedFrameScheduler::new());
        let controller = ViewportController::new(
            config,
            TimeRange::new(0.0, 1000.0),
            store.clone(),
            scheduler.clone(),
        )
        .expect("valid config");

        let weak = Rc::downgrade(&controller);
        store.subscribe(move |selection| {
            if let Some(controller) = weak.upgrade() {
                controller.on_selection_changed(selection);
            }
        });

        let events = Rc::new(RefCell::new(Vec::new()));
        {
            let events = events.clone();
            controller.subscribe(move |event| events.borrow_mut().push(event.clone()));
        }

        let layout = FixedLayout::new(ContainerGeometry::new(WIDTH, HEIGHT, 0.0));
        Self { controller, store, scheduler, layout, events }
    }

    /// Mount and run the first measurement frame.
    pub fn mounted(config: ViewportConfig, selection: ProfileSelection) -> Self {
        let harness = Self::new(config, selection);
        harness.controller.mount(harness.layout.clone());
        assert!(harness.scheduler.run_pending());
        harness
    }

    pub fn event_types(&self) -> Vec<&'static str> {
        use flame_chart_viewport::domain::events::DomainEvent;
        self.events.borrow().iter().map(|event| event.event_type()).collect()
    }
}
