pub mod chart;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod web;

pub use crate::config::CliConfig;
pub use crate::core::{engine::DashboardEngine, pipeline::CbsPipeline};
pub use crate::utils::error::{DashboardError, Result};
