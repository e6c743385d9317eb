use super::drag::DragSession;
use super::value_objects::{
    ContainerGeometry, ContentExtent, CssPixels, HorizontalViewport, Milliseconds,
    ProfileSelection, ResolvedViewport, TimeRange, VerticalViewport, ViewportConfig, WheelInput,
};
use crate::domain::geometry::{clamp, clamp_vertical, fraction_of, shift_into_unit_interval, zoom_scale};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_trace};

/// Domain entity - the visible window of a flame chart panel.
///
/// The horizontal window is owned by the external selection store: it is
/// only ever written by [`FlameChartViewport::receive_props`]. Zoom and pan
/// handlers return the selection update to dispatch instead of mutating it.
/// The vertical window and the drag session are local state.
#[derive(Debug, Clone)]
pub struct FlameChartViewport {
    config: ViewportConfig,
    time_range: TimeRange,
    selection: ProfileSelection,
    content: ContentExtent,
    container: ContainerGeometry,
    horizontal: HorizontalViewport,
    vertical: VerticalViewport,
    drag: DragSession,
    is_expanded: bool,
}

impl FlameChartViewport {
    /// Seed the viewport from the current selection and time range. The
    /// container is unmeasured until the first layout pass.
    pub fn new(config: ViewportConfig, selection: ProfileSelection, time_range: TimeRange) -> Self {
        Self {
            config,
            time_range,
            selection,
            content: ContentExtent::default(),
            container: ContainerGeometry::default(),
            horizontal: HorizontalViewport::from_selection(&selection, &time_range),
            vertical: VerticalViewport::default(),
            drag: DragSession::Idle,
            is_expanded: false,
        }
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    pub fn time_range(&self) -> TimeRange {
        self.time_range
    }

    pub fn selection(&self) -> ProfileSelection {
        self.selection
    }

    pub fn content(&self) -> ContentExtent {
        self.content
    }

    pub fn container(&self) -> ContainerGeometry {
        self.container
    }

    pub fn horizontal(&self) -> HorizontalViewport {
        self.horizontal
    }

    pub fn vertical(&self) -> VerticalViewport {
        self.vertical
    }

    pub fn drag(&self) -> DragSession {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn is_expanded(&self) -> bool {
        self.is_expanded
    }

    pub fn resolved(&self) -> ResolvedViewport {
        ResolvedViewport {
            horizontal: self.horizontal,
            vertical: self.vertical,
            container: self.container,
            time_range: self.time_range,
            is_dragging: self.drag.is_dragging(),
            is_expanded: self.is_expanded,
        }
    }

    /// Absorb an externally changed selection and/or time range.
    ///
    /// Returns false when neither changed. Never produces a dispatch.
    pub fn receive_props(&mut self, selection: ProfileSelection, time_range: TimeRange) -> bool {
        if selection == self.selection && time_range == self.time_range {
            return false;
        }
        self.selection = selection;
        self.time_range = time_range;
        self.horizontal = HorizontalViewport::from_selection(&selection, &time_range);
        log_trace!(
            LogComponent::Domain("FlameChartViewport"),
            "derived window [{:.6}, {:.6}]",
            self.horizontal.left,
            self.horizontal.right
        );
        true
    }

    pub fn set_expanded(&mut self, is_expanded: bool) -> bool {
        if self.is_expanded == is_expanded {
            return false;
        }
        self.is_expanded = is_expanded;
        true
    }

    /// Zoom around the cursor. Returns the selection update to dispatch, if any.
    pub fn zoom(&self, input: WheelInput) -> Option<ProfileSelection> {
        if !self.is_expanded {
            return None;
        }
        let mouse_center = clamp(
            0.0,
            1.0,
            fraction_of(input.client_x, self.container.left, self.container.width)?,
        );
        let delta = input.delta_pixels(self.config.line_scroll_size);

        let HorizontalViewport { left, right } = self.horizontal;
        let scale = zoom_scale(self.horizontal.length(), delta, self.config.wheel_sensitivity);
        let mut new_left = clamp(0.0, 1.0, left - scale * mouse_center);
        let mut new_right = clamp(0.0, 1.0, right + scale * (1.0 - mouse_center));

        let maximum_zoom = self.config.maximum_zoom;
        if new_right - new_left < maximum_zoom {
            let middle = self.horizontal.midpoint();
            (new_left, new_right) =
                shift_into_unit_interval(middle - maximum_zoom * 0.5, middle + maximum_zoom * 0.5);
        }

        let next = HorizontalViewport::new(new_left, new_right);
        if next.is_full() {
            if self.horizontal.is_full() {
                return None;
            }
            log_debug!(LogComponent::Domain("FlameChartViewport"), "zoomed out to full range");
            return Some(ProfileSelection::none());
        }

        Some(next.to_selection(&self.time_range))
    }

    /// Start a drag session at the pointer position.
    pub fn pointer_down(&mut self, x: CssPixels, y: CssPixels) {
        self.drag = DragSession::start(x, y);
    }

    /// Pan both axes by the pointer delta since the previous event.
    ///
    /// Updates the vertical window locally and returns the horizontal result
    /// as a selection update.
    pub fn pointer_move(&mut self, x: CssPixels, y: CssPixels) -> Option<ProfileSelection> {
        let (delta_x, delta_y) = self.drag.advance(x, y)?;
        if !self.container.is_measured() {
            return None;
        }

        let HorizontalViewport { left, right } = self.horizontal;
        let unit_offset_x = self.horizontal.length() * delta_x / self.container.width;
        let (new_left, new_right) =
            shift_into_unit_interval(left - unit_offset_x, right - unit_offset_x);

        let (top, bottom) = clamp_vertical(
            self.vertical.top - delta_y,
            self.container.height,
            self.content.max_viewport_height,
        );
        self.vertical = VerticalViewport::new(top, bottom);

        Some(HorizontalViewport::new(new_left, new_right).to_selection(&self.time_range))
    }

    /// End the drag session. Returns whether a session was active.
    pub fn pointer_up(&mut self) -> bool {
        let was_dragging = self.drag.is_dragging();
        self.drag = DragSession::Idle;
        was_dragging
    }

    /// Apply a fresh container measurement, keeping the top of the vertical
    /// window anchored. Returns false when nothing changed.
    ///
    /// A box without positive size (hidden panel, margins larger than the
    /// rect) is recorded but leaves the vertical window untouched until a
    /// real size arrives.
    pub fn apply_measurement(&mut self, geometry: ContainerGeometry) -> bool {
        if geometry == self.container {
            return false;
        }
        self.container = geometry;
        if !geometry.is_measured() {
            return true;
        }
        let (top, bottom) = clamp_vertical(
            self.vertical.top,
            geometry.height,
            self.content.max_viewport_height,
        );
        self.vertical = VerticalViewport::new(top, bottom);
        true
    }

    /// New stack-timing content: scroll back to the top when the extent changed.
    pub fn set_content(&mut self, content: ContentExtent) -> bool {
        if content == self.content {
            return false;
        }
        self.content = content;
        self.vertical = VerticalViewport::new(0.0, self.container.height.max(0.0));
        true
    }

    /// Absolute time under a client x coordinate.
    pub fn time_at_pixel(&self, client_x: CssPixels) -> Option<Milliseconds> {
        if self.container.width <= 0.0 {
            return None;
        }
        let unit = self
            .horizontal
            .pixels_to_unit(client_x - self.container.left, self.container.width);
        Some(self.time_range.time_at(unit))
    }

    /// Client x coordinate of an absolute time; may fall outside the container.
    pub fn pixel_at_time(&self, time: Milliseconds) -> CssPixels {
        let unit = (time - self.time_range.start) / self.time_range.length();
        self.container.left + self.horizontal.unit_to_pixels(unit, self.container.width)
    }
}
