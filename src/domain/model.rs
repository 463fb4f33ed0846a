use serde::{Deserialize, Serialize};

/// One entry of the CBS typed data set, decoded at the fetch boundary.
///
/// Field names follow the official CBS field codes of data set 84583NED.
/// Fields other than the four consumed here are ignored. The region code is
/// mandatory; the other fields are null for rows CBS publishes without a
/// figure, and incomplete rows are dropped during transformation.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionRecord {
    #[serde(rename = "WijkenEnBuurten")]
    pub code: String,
    #[serde(rename = "Gemeentenaam_1")]
    pub municipality: Option<String>,
    #[serde(rename = "Bevolking_1jan_5")]
    pub population: Option<f64>,
    #[serde(rename = "Mantelzorgers_65jaarOfOuder_30")]
    pub caregivers: Option<f64>,
}

/// A fully populated municipality row with the derived caregiver ratio
/// (informal caregivers aged 65+ per 1,000 population).
#[derive(Debug, Clone, Serialize)]
pub struct RegionStats {
    pub code: String,
    pub municipality: String,
    pub population: f64,
    pub caregivers: f64,
    pub ratio: f64,
}

/// Everything the page renderer needs for one dashboard load.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub region_count: usize,
    pub preview: Vec<RegionStats>,
    pub chart_svg: String,
}
