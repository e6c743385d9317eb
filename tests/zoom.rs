mod common;

use common::{HEIGHT, WIDTH, assert_bounds, close, measured_viewport};
use flame_chart_viewport::{
    ContainerGeometry, FlameChartViewport, HorizontalViewport, ProfileSelection, TimeRange,
    ViewportConfig, WheelInput,
};
use quickcheck_macros::quickcheck;

fn expanded(selection: ProfileSelection) -> FlameChartViewport {
    let mut viewport = measured_viewport(selection);
    viewport.set_expanded(true);
    viewport
}

#[test]
fn zoom_in_at_center_shrinks_both_sides() {
    let viewport = expanded(ProfileSelection::none());
    // 1 + d * 0.001 = 5/6, so the window loses 0.2 of its length.
    let update = viewport
        .zoom(WheelInput::pixels(-500.0 / 3.0, 500.0))
        .expect("zoom dispatches");
    assert_bounds(update, 100.0, 900.0);
}

#[test]
fn zoom_keeps_time_under_cursor() {
    let viewport = expanded(ProfileSelection::range(200.0, 600.0));
    let before = viewport.time_at_pixel(250.0).expect("measured");

    let update = viewport.zoom(WheelInput::pixels(-100.0, 250.0)).expect("zoom dispatches");
    let after = HorizontalViewport::from_selection(&update, &TimeRange::new(0.0, 1000.0));

    assert!(after.length() < 0.4);
    let time = 1000.0 * after.pixels_to_unit(250.0, WIDTH);
    assert!(close(time, before), "{time} != {before}");
}

#[quickcheck]
fn time_under_cursor_is_fixed_for_any_cursor(cursor: u16, delta: i16) -> bool {
    let viewport = expanded(ProfileSelection::range(300.0, 500.0));
    let cursor = f64::from(cursor % 1001);
    let Some(before) = viewport.time_at_pixel(cursor) else {
        return false;
    };

    match viewport.zoom(WheelInput::pixels(f64::from(delta % 200), cursor)) {
        None => true,
        Some(update) => {
            let after = HorizontalViewport::from_selection(&update, &TimeRange::new(0.0, 1000.0));
            close(1000.0 * after.pixels_to_unit(cursor, WIDTH), before)
        }
    }
}

#[test]
fn zoom_floor_centres_on_previous_midpoint() {
    let mut viewport = FlameChartViewport::new(
        ViewportConfig::with_maximum_zoom(0.05),
        ProfileSelection::range(100.0, 900.0),
        TimeRange::new(0.0, 1000.0),
    );
    viewport.apply_measurement(ContainerGeometry::new(WIDTH, HEIGHT, 0.0));
    viewport.set_expanded(true);

    // Would shrink the window well below the floor.
    let update = viewport.zoom(WheelInput::pixels(-900.0, 300.0)).expect("zoom dispatches");
    assert_bounds(update, 475.0, 525.0);
}

#[test]
fn zoom_floor_window_stays_inside_range() {
    let mut viewport = FlameChartViewport::new(
        ViewportConfig::with_maximum_zoom(0.05),
        ProfileSelection::range(0.0, 20.0),
        TimeRange::new(0.0, 1000.0),
    );
    viewport.apply_measurement(ContainerGeometry::new(WIDTH, HEIGHT, 0.0));
    viewport.set_expanded(true);

    let update = viewport.zoom(WheelInput::pixels(-100.0, 0.0)).expect("zoom dispatches");
    assert_bounds(update, 0.0, 50.0);
}

#[test]
fn zoom_out_past_full_range_clears_selection() {
    let viewport = expanded(ProfileSelection::range(100.0, 900.0));
    let update = viewport.zoom(WheelInput::pixels(1000.0, 500.0)).expect("zoom dispatches");
    assert_eq!(update, ProfileSelection::none());
}

#[test]
fn zoom_out_at_full_range_is_a_no_op() {
    let viewport = expanded(ProfileSelection::none());
    assert_eq!(viewport.zoom(WheelInput::pixels(120.0, 500.0)), None);
}

#[test]
fn collapsed_panel_ignores_wheel() {
    let viewport = measured_viewport(ProfileSelection::none());
    assert!(!viewport.is_expanded());
    assert_eq!(viewport.zoom(WheelInput::pixels(-100.0, 500.0)), None);
}

#[test]
fn unmeasured_panel_ignores_wheel() {
    let mut viewport = FlameChartViewport::new(
        ViewportConfig::default(),
        ProfileSelection::none(),
        TimeRange::new(0.0, 1000.0),
    );
    viewport.set_expanded(true);
    assert_eq!(viewport.zoom(WheelInput::pixels(-100.0, 500.0)), None);
}

#[test]
fn line_deltas_scale_by_line_height() {
    let viewport = expanded(ProfileSelection::range(200.0, 600.0));
    let by_lines = viewport.zoom(WheelInput::lines(-4.0, 400.0));
    let by_pixels = viewport.zoom(WheelInput::pixels(-60.0, 400.0));
    assert!(by_lines.is_some());
    assert_eq!(by_lines, by_pixels);
}

#[test]
fn cursor_outside_container_is_clamped() {
    let viewport = expanded(ProfileSelection::range(200.0, 600.0));
    let past_right = viewport.zoom(WheelInput::pixels(-100.0, 5000.0));
    let at_right = viewport.zoom(WheelInput::pixels(-100.0, WIDTH));
    assert_eq!(past_right, at_right);
}
