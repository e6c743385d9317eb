use wasm_bindgen::prelude::*;

pub mod application;
pub mod domain;
pub mod event_utils;
pub mod infrastructure;
pub mod presentation;

pub use application::{LayoutTracker, ViewportController};
pub use domain::errors::ViewportError;
pub use domain::events::ViewportEvent;
pub use domain::flame_chart::*;
pub use presentation::FlameChartViewportPanel;

/// Install the browser logger, clock and panic hook.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new_development());
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    crate::log_info!(domain::logging::LogComponent::Presentation("Initialize"), "flame chart viewport ready");
}
