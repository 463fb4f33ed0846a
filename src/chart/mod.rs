pub mod bar_chart;
pub mod common;

pub use bar_chart::{draw_bar_chart, BarChartOptions, BarChartPoint};
pub use common::GridLineInterval;
