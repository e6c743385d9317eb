pub mod flame_chart_panel;

pub use flame_chart_panel::*;
