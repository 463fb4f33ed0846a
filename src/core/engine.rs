use crate::core::{DashboardView, Pipeline};
use crate::utils::error::Result;

/// Number of rows shown in the data preview table.
const PREVIEW_ROWS: usize = 5;

pub struct DashboardEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> DashboardEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs one full fetch -> transform -> render pass and assembles the view
    /// for a single page load. Any stage error aborts the run.
    pub async fn run(&self) -> Result<DashboardView> {
        tracing::info!("Fetching data from the CBS API");
        let raw = self.pipeline.fetch().await?;
        tracing::info!("Fetched {} records", raw.len());

        let stats = self.pipeline.transform(raw).await?;
        tracing::info!("Transformed {} complete municipality rows", stats.len());

        let chart_svg = self.pipeline.render(&stats).await?;

        Ok(DashboardView {
            region_count: stats.len(),
            preview: stats.iter().take(PREVIEW_ROWS).cloned().collect(),
            chart_svg,
        })
    }
}
