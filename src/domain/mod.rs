pub mod errors;
pub mod events;
pub mod flame_chart;
pub mod geometry;
pub mod logging;
