pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{DashboardView, RegionRecord, RegionStats};
pub use crate::domain::ports::{ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
