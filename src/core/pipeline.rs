use crate::chart::{draw_bar_chart, BarChartOptions, BarChartPoint};
use crate::core::{ConfigProvider, Pipeline, RegionRecord, RegionStats};
use crate::utils::error::{DashboardError, Result};
use reqwest::{Client, StatusCode};

/// Number of municipalities shown in the ranked chart.
const TOP_REGIONS: usize = 20;

pub struct CbsPipeline<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> CbsPipeline<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Pipeline for CbsPipeline<C> {
    async fn fetch(&self) -> Result<Vec<RegionRecord>> {
        tracing::debug!("Making API request to: {}", self.config.api_endpoint());
        let response = self.client.get(self.config.api_endpoint()).send().await?;

        tracing::debug!("API response status: {}", response.status());
        if response.status() != StatusCode::OK {
            return Err(DashboardError::FetchFailed {
                status: response.status().as_u16(),
            });
        }

        let body: serde_json::Value = response.json().await?;
        let value = body
            .get("value")
            .ok_or_else(|| DashboardError::SchemaError {
                message: "response body has no \"value\" key".to_string(),
            })?;

        let records: Vec<RegionRecord> =
            serde_json::from_value(value.clone()).map_err(|e| DashboardError::SchemaError {
                message: format!("\"value\" records do not match the data set layout: {}", e),
            })?;

        Ok(records)
    }

    async fn transform(&self, records: Vec<RegionRecord>) -> Result<Vec<RegionStats>> {
        let stats = records
            .into_iter()
            .filter_map(|record| {
                let population = record.population?;
                let caregivers = record.caregivers?;
                let municipality = record.municipality?;
                // Informal caregivers aged 65+ per 1,000 population. A zero
                // population makes this non-finite; such rows are invalid.
                let ratio = caregivers / population * 1000.0;
                if !ratio.is_finite() {
                    tracing::warn!(
                        "Dropping region {} with population {}",
                        record.code,
                        population
                    );
                    return None;
                }
                Some(RegionStats {
                    code: record.code,
                    municipality,
                    population,
                    caregivers,
                    ratio,
                })
            })
            .collect();

        Ok(stats)
    }

    async fn render(&self, stats: &[RegionStats]) -> Result<String> {
        let mut ranked = stats.to_vec();
        // Stable sort: municipalities with equal ratios keep arrival order.
        ranked.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));
        ranked.truncate(TOP_REGIONS);

        let data = ranked
            .into_iter()
            .map(|row| BarChartPoint {
                label: row.municipality,
                y: row.ratio,
            })
            .collect();

        let options = BarChartOptions {
            data,
            title: Some("Top 20 Gemeenten met Hoogste Mantelzorg Ratio".to_string()),
            x_axis_title: Some("Gemeente".to_string()),
            y_axis_title: Some("Mantelzorgers per 1.000 inwoners".to_string()),
            color: "skyblue".to_string(),
            width: 1000.0,
            height: 600.0,
            y_max: None,
            y_axis_grid_line_interval: None,
        };

        Ok(draw_bar_chart(&options))
    }
}
