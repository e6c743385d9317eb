pub mod layout_tracker;
pub mod viewport_controller;

pub use layout_tracker::*;
pub use viewport_controller::*;
