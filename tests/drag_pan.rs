mod common;

use common::{Harness, assert_bounds, measured_viewport};
use flame_chart_viewport::infrastructure::InMemorySelectionStore;
use flame_chart_viewport::{
    ContainerGeometry, ContentExtent, FlameChartViewport, ProfileSelection, SelectionStore,
    TimeRange, VerticalViewport, ViewportConfig,
};

#[test]
fn dragging_left_moves_window_right() {
    let mut viewport = measured_viewport(ProfileSelection::range(200.0, 400.0));
    viewport.pointer_down(600.0, 100.0);
    // Half the container width over a window of 0.2 is 0.1 of the range.
    let update = viewport.pointer_move(100.0, 100.0).expect("drag dispatches");
    assert_bounds(update, 300.0, 500.0);
}

#[test]
fn pan_stops_at_left_edge_keeping_width() {
    let mut viewport = measured_viewport(ProfileSelection::range(0.0, 50.0));
    viewport.pointer_down(100.0, 0.0);
    let update = viewport.pointer_move(300.0, 0.0).expect("drag dispatches");
    assert_bounds(update, 0.0, 50.0);
}

#[test]
fn pan_stops_at_right_edge_keeping_width() {
    let mut viewport = measured_viewport(ProfileSelection::range(900.0, 1000.0));
    viewport.pointer_down(500.0, 0.0);
    let update = viewport.pointer_move(0.0, 0.0).expect("drag dispatches");
    assert_bounds(update, 900.0, 1000.0);
}

#[test]
fn vertical_pan_is_local_and_clamped_to_content() {
    let mut viewport = measured_viewport(ProfileSelection::none());
    viewport.pointer_down(0.0, 300.0);

    viewport.pointer_move(0.0, 200.0);
    assert_eq!(viewport.vertical(), VerticalViewport::new(100.0, 600.0));

    viewport.pointer_move(0.0, -2000.0);
    assert_eq!(viewport.vertical(), VerticalViewport::new(1500.0, 2000.0));

    viewport.pointer_move(0.0, 5000.0);
    assert_eq!(viewport.vertical(), VerticalViewport::new(0.0, 500.0));
}

#[test]
fn short_content_stays_anchored_to_top() {
    let mut viewport = FlameChartViewport::new(
        ViewportConfig::default(),
        ProfileSelection::none(),
        TimeRange::new(0.0, 1000.0),
    );
    viewport.set_content(ContentExtent::new(200.0, 4));
    viewport.apply_measurement(ContainerGeometry::new(1000.0, 500.0, 0.0));

    viewport.pointer_down(0.0, 400.0);
    viewport.pointer_move(0.0, 100.0);
    assert_eq!(viewport.vertical(), VerticalViewport::new(0.0, 500.0));
}

#[test]
fn moves_without_a_drag_are_ignored() {
    let mut viewport = measured_viewport(ProfileSelection::range(200.0, 400.0));
    assert_eq!(viewport.pointer_move(10.0, 10.0), None);

    viewport.pointer_down(0.0, 0.0);
    assert!(viewport.is_dragging());
    assert!(viewport.pointer_up());
    assert!(!viewport.pointer_up());
    assert_eq!(viewport.pointer_move(50.0, 50.0), None);
}

#[test]
fn unmeasured_container_does_not_pan() {
    let mut viewport = FlameChartViewport::new(
        ViewportConfig::default(),
        ProfileSelection::range(200.0, 400.0),
        TimeRange::new(0.0, 1000.0),
    );
    viewport.pointer_down(0.0, 0.0);
    assert_eq!(viewport.pointer_move(100.0, 0.0), None);
    assert!(viewport.is_dragging());
}

#[test]
fn consecutive_moves_pan_from_previous_position() {
    let harness = Harness::mounted(ViewportConfig::default(), ProfileSelection::range(200.0, 400.0));
    let controller = &harness.controller;

    controller.handle_pointer_down(500.0, 0.0);
    controller.handle_pointer_move(400.0, 0.0);
    controller.handle_pointer_move(300.0, 0.0);
    controller.handle_pointer_up();

    assert_eq!(harness.store.dispatch_count(), 2);
    assert_bounds(harness.store.selection(), 240.0, 440.0);
    assert!(!controller.is_dragging());
    assert_eq!(
        harness.event_types().iter().filter(|t| **t == "DragEnded").count(),
        1
    );
}

#[test]
fn teardown_ends_drag() {
    let harness = Harness::mounted(ViewportConfig::default(), ProfileSelection::none());
    harness.controller.handle_pointer_down(10.0, 10.0);
    harness.controller.teardown();

    assert!(!harness.controller.is_dragging());
    harness.controller.handle_pointer_move(200.0, 10.0);
    assert_eq!(harness.store.dispatch_count(), 0);
}

#[test]
fn store_is_only_written_through_dispatch() {
    let store = InMemorySelectionStore::new(ProfileSelection::range(1.0, 2.0));
    assert_eq!(store.dispatch_count(), 0);
    store.update_profile_selection(ProfileSelection::none());
    assert_eq!(store.history(), vec![ProfileSelection::none()]);
    assert_eq!(store.last_dispatched(), Some(ProfileSelection::none()));
}
