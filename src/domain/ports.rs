use crate::domain::model::{RegionRecord, RegionStats};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn bind_addr(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn fetch(&self) -> Result<Vec<RegionRecord>>;
    async fn transform(&self, records: Vec<RegionRecord>) -> Result<Vec<RegionStats>>;
    async fn render(&self, stats: &[RegionStats]) -> Result<String>;
}
