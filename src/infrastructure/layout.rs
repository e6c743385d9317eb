use crate::domain::errors::{LayoutResult, ViewportError};
use crate::domain::flame_chart::{
    ContainerGeometry, CssPixels, FrameScheduler, FrameTask, LayoutSource, Margins,
};
use crate::domain::logging::LogComponent;
use crate::log_trace;
use gloo::render::{AnimationFrame, request_animation_frame};
use std::cell::{Cell, RefCell};
use wasm_bindgen::JsCast;
use web_sys::Element;

/// Parse a computed CSS length such as `"12px"`. Anything unparsable
/// (`"auto"`, empty) counts as zero.
pub fn parse_css_pixels(value: &str) -> CssPixels {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value).trim();
    match number.parse::<f64>() {
        Ok(px) if px.is_finite() => px,
        _ => 0.0,
    }
}

fn computed_margins(element: &Element) -> LayoutResult<Margins> {
    let style = gloo::utils::window()
        .get_computed_style(element)
        .map_err(|e| ViewportError::BrowserApi(format!("getComputedStyle failed: {:?}", e)))?
        .ok_or_else(|| ViewportError::LayoutUnavailable("element has no computed style".to_string()))?;

    let margin = |property: &str| -> CssPixels {
        style
            .get_property_value(property)
            .map(|value| parse_css_pixels(&value))
            .unwrap_or(0.0)
    };

    Ok(Margins {
        top: margin("margin-top"),
        right: margin("margin-right"),
        bottom: margin("margin-bottom"),
        left: margin("margin-left"),
    })
}

/// Content box of `element`: its bounding client rect minus its margins.
pub fn measure_element(element: &Element) -> LayoutResult<ContainerGeometry> {
    if !element.is_connected() {
        return Err(ViewportError::LayoutUnavailable("element is not in the document".to_string()));
    }
    let rect = element.get_bounding_client_rect();
    let margins = computed_margins(element)?;
    Ok(ContainerGeometry::from_bounding_box(rect.left(), rect.width(), rect.height(), &margins))
}

/// Measures a DOM element.
pub struct DomLayoutSource {
    element: Element,
}

impl DomLayoutSource {
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    pub fn from_html_element(element: &web_sys::HtmlElement) -> Self {
        Self::new(element.clone().unchecked_into::<Element>())
    }
}

impl LayoutSource for DomLayoutSource {
    fn measure(&self) -> LayoutResult<ContainerGeometry> {
        measure_element(&self.element)
    }
}

/// Runs tasks on `requestAnimationFrame`. Replacing the held frame handle
/// cancels the frame it belonged to.
#[derive(Default)]
pub struct AnimationFrameScheduler {
    pending: RefCell<Option<AnimationFrame>>,
}

impl AnimationFrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&self, task: FrameTask) {
        let frame = request_animation_frame(move |_timestamp| task());
        if self.pending.borrow_mut().replace(frame).is_some() {
            log_trace!(
                LogComponent::Infrastructure("AnimationFrameScheduler"),
                "superseded pending frame"
            );
        }
    }

    fn cancel_frame(&self) {
        self.pending.borrow_mut().take();
    }
}

/// Holds at most one task until the host runs it. Used where there is no
/// animation frame loop (native hosts, tests).
#[derive(Default)]
pub struct QueuedFrameScheduler {
    pending: RefCell<Option<FrameTask>>,
    superseded: Cell<usize>,
}

impl QueuedFrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }

    /// How many queued tasks were replaced before they ran.
    pub fn superseded(&self) -> usize {
        self.superseded.get()
    }

    /// Run the queued task. Returns false when nothing was queued.
    pub fn run_pending(&self) -> bool {
        let task = self.pending.borrow_mut().take();
        match task {
            Some(task) => {
                task();
                true
            }
            None => false,
        }
    }
}

impl FrameScheduler for QueuedFrameScheduler {
    fn request_frame(&self, task: FrameTask) {
        if self.pending.borrow_mut().replace(task).is_some() {
            self.superseded.set(self.superseded.get() + 1);
        }
    }

    fn cancel_frame(&self) {
        self.pending.borrow_mut().take();
    }
}
