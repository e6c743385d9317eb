use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, FromRepr};

use crate::domain::errors::{ConfigResult, ViewportError};
use crate::domain::geometry::{clamp, pixels_to_unit, unit_to_pixels};

pub type Milliseconds = f64;
pub type CssPixels = f64;
/// A fraction of the *current* time range, not of the whole profile.
pub type UnitInterval = f64;

/// Lower bound used in place of a zero-length time range.
pub const MIN_TIME_RANGE_LENGTH: Milliseconds = 1e-6;
/// Pixels per line for line-based wheel deltas.
pub const LINE_SCROLL_SIZE: CssPixels = 15.0;
pub const WHEEL_SENSITIVITY: f64 = 0.001;
pub const DEFAULT_MAXIMUM_ZOOM: UnitInterval = 0.0001;

/// Value Object - the currently selected zoom range of the profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: Milliseconds,
    pub end: Milliseconds,
}

impl TimeRange {
    pub fn new(start: Milliseconds, end: Milliseconds) -> Self {
        Self { start, end }
    }

    /// Length of the range, never below [`MIN_TIME_RANGE_LENGTH`].
    pub fn length(&self) -> Milliseconds {
        let length = self.end - self.start;
        if length > MIN_TIME_RANGE_LENGTH { length } else { MIN_TIME_RANGE_LENGTH }
    }

    /// Position of `time` inside the range, clamped to `[0, 1]`.
    pub fn unit_at(&self, time: Milliseconds) -> UnitInterval {
        clamp(0.0, 1.0, (time - self.start) / self.length())
    }

    pub fn time_at(&self, unit: UnitInterval) -> Milliseconds {
        self.start + self.length() * unit
    }
}

/// Value Object - the selection owned by the shared selection store.
///
/// Mirrors the store's wire shape, hence the optional bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSelection {
    pub has_selection: bool,
    pub is_modifying: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_start: Option<Milliseconds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_end: Option<Milliseconds>,
}

impl ProfileSelection {
    /// The "clear selection" update.
    pub fn none() -> Self {
        Self::default()
    }

    /// A committed (not being modified) selection.
    pub fn range(start: Milliseconds, end: Milliseconds) -> Self {
        Self {
            has_selection: true,
            is_modifying: false,
            selection_start: Some(start),
            selection_end: Some(end),
        }
    }

    /// Selection bounds, if there is a usable selection.
    pub fn bounds(&self) -> Option<(Milliseconds, Milliseconds)> {
        if !self.has_selection {
            return None;
        }
        match (self.selection_start, self.selection_end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

/// Value Object - horizontal window in unit-interval coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalViewport {
    pub left: UnitInterval,
    pub right: UnitInterval,
}

impl Default for HorizontalViewport {
    fn default() -> Self {
        Self::FULL
    }
}

impl HorizontalViewport {
    pub const FULL: HorizontalViewport = HorizontalViewport { left: 0.0, right: 1.0 };

    pub fn new(left: UnitInterval, right: UnitInterval) -> Self {
        Self { left, right }
    }

    pub fn length(&self) -> UnitInterval {
        self.right - self.left
    }

    pub fn is_full(&self) -> bool {
        self.left == 0.0 && self.right == 1.0
    }

    pub fn midpoint(&self) -> UnitInterval {
        (self.left + self.right) * 0.5
    }

    /// Derive the window from an externally owned selection.
    ///
    /// No selection maps to the full range. Out-of-range selections are
    /// clamped and reversed ones reordered.
    pub fn from_selection(selection: &ProfileSelection, time_range: &TimeRange) -> Self {
        match selection.bounds() {
            Some((start, end)) => {
                let a = time_range.unit_at(start);
                let b = time_range.unit_at(end);
                Self { left: a.min(b), right: a.max(b) }
            }
            None => Self::FULL,
        }
    }

    /// Inverse of [`HorizontalViewport::from_selection`] for a committed selection.
    pub fn to_selection(&self, time_range: &TimeRange) -> ProfileSelection {
        ProfileSelection::range(time_range.time_at(self.left), time_range.time_at(self.right))
    }

    pub fn unit_to_pixels(&self, unit: UnitInterval, container_width: CssPixels) -> CssPixels {
        unit_to_pixels(unit, self.left, self.right, container_width)
    }

    pub fn pixels_to_unit(&self, pixels: CssPixels, container_width: CssPixels) -> UnitInterval {
        pixels_to_unit(pixels, self.left, self.right, container_width)
    }
}

/// Value Object - vertical window in CSS pixels into the full content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VerticalViewport {
    pub top: CssPixels,
    pub bottom: CssPixels,
}

impl VerticalViewport {
    pub fn new(top: CssPixels, bottom: CssPixels) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> CssPixels {
        self.bottom - self.top
    }
}

/// Margins of the container element, subtracted from its bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margins {
    pub top: CssPixels,
    pub right: CssPixels,
    pub bottom: CssPixels,
    pub left: CssPixels,
}

/// Value Object - usable content box of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerGeometry {
    pub width: CssPixels,
    pub height: CssPixels,
    pub left: CssPixels,
}

impl ContainerGeometry {
    pub fn new(width: CssPixels, height: CssPixels, left: CssPixels) -> Self {
        Self { width, height, left }
    }

    /// Content box from a bounding box, obeying the element's margins.
    pub fn from_bounding_box(
        left: CssPixels,
        width: CssPixels,
        height: CssPixels,
        margins: &Margins,
    ) -> Self {
        Self {
            width: width - margins.left - margins.right,
            height: height - margins.top - margins.bottom,
            left: left + margins.left,
        }
    }

    /// False until the panel has been laid out with a positive size.
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Value Object - extent of the stack-timing content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContentExtent {
    pub max_viewport_height: CssPixels,
    pub max_stack_depth: u32,
}

impl ContentExtent {
    pub fn new(max_viewport_height: CssPixels, max_stack_depth: u32) -> Self {
        Self { max_viewport_height, max_stack_depth }
    }
}

/// Wheel delta units, numbered as in DOM `WheelEvent.deltaMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, FromRepr, AsRefStr, EnumIter)]
#[repr(u32)]
pub enum DeltaMode {
    #[default]
    #[strum(serialize = "pixel")]
    Pixel = 0,
    #[strum(serialize = "line")]
    Line = 1,
    #[strum(serialize = "page")]
    Page = 2,
}

/// Value Object - one wheel event as seen by the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelInput {
    pub delta_y: f64,
    pub mode: DeltaMode,
    pub client_x: CssPixels,
}

impl WheelInput {
    pub fn pixels(delta_y: f64, client_x: CssPixels) -> Self {
        Self { delta_y, mode: DeltaMode::Pixel, client_x }
    }

    pub fn lines(delta_y: f64, client_x: CssPixels) -> Self {
        Self { delta_y, mode: DeltaMode::Line, client_x }
    }

    /// Pixel-equivalent magnitude. Only line deltas are rescaled.
    pub fn delta_pixels(&self, line_scroll_size: CssPixels) -> f64 {
        match self.mode {
            DeltaMode::Line => self.delta_y * line_scroll_size,
            DeltaMode::Pixel | DeltaMode::Page => self.delta_y,
        }
    }
}

/// Host supplied configuration of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewportConfig {
    /// Smallest horizontal window width zooming may reach.
    pub maximum_zoom: UnitInterval,
    pub wheel_sensitivity: f64,
    pub line_scroll_size: CssPixels,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            maximum_zoom: DEFAULT_MAXIMUM_ZOOM,
            wheel_sensitivity: WHEEL_SENSITIVITY,
            line_scroll_size: LINE_SCROLL_SIZE,
        }
    }
}

impl ViewportConfig {
    pub fn with_maximum_zoom(maximum_zoom: UnitInterval) -> Self {
        Self { maximum_zoom, ..Default::default() }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.maximum_zoom > 0.0 && self.maximum_zoom <= 1.0) {
            return Err(ViewportError::InvalidConfig(format!(
                "maximumZoom must be in (0, 1], got {}",
                self.maximum_zoom
            )));
        }
        if !(self.wheel_sensitivity.is_finite() && self.wheel_sensitivity > 0.0) {
            return Err(ViewportError::InvalidConfig(format!(
                "wheelSensitivity must be positive, got {}",
                self.wheel_sensitivity
            )));
        }
        if !(self.line_scroll_size.is_finite() && self.line_scroll_size > 0.0) {
            return Err(ViewportError::InvalidConfig(format!(
                "lineScrollSize must be positive, got {}",
                self.line_scroll_size
            )));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ViewportError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Everything the renderer needs to paint the current window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedViewport {
    pub horizontal: HorizontalViewport,
    pub vertical: VerticalViewport,
    pub container: ContainerGeometry,
    pub time_range: TimeRange,
    pub is_dragging: bool,
    pub is_expanded: bool,
}

impl ResolvedViewport {
    /// CSS classes of the panel element for this state.
    pub fn class_name(&self) -> String {
        let mut class_name = String::from("flameChartViewport");
        class_name.push_str(if self.is_expanded { " expanded" } else { " collapsed" });
        if self.is_dragging {
            class_name.push_str(" dragging");
        }
        class_name
    }
}
