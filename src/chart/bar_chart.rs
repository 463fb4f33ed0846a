//! Standalone SVG bar charts.
//!
//! The chart is rendered server-side into a self-contained `<svg>` fragment
//! that the page embeds inline; bar tooltips use native SVG `<title>`
//! elements, so no script is required in the browser.

use crate::chart::common::{
    compute_grid_line_interval, format_grid_value, xml_escape, GridLineInterval,
};

const TOP_PADDING: f64 = 60.0;
const RIGHT_PADDING: f64 = 30.0;
const BOTTOM_PADDING: f64 = 150.0;
const LEFT_PADDING: f64 = 80.0;
const BAR_GAP: f64 = 0.2;
const GRID_LINE_TARGET: usize = 6;

pub struct BarChartOptions {
    pub data: Vec<BarChartPoint>,
    pub title: Option<String>,
    pub x_axis_title: Option<String>,
    pub y_axis_title: Option<String>,
    pub color: String,
    pub width: f64,
    pub height: f64,
    pub y_max: Option<f64>,
    pub y_axis_grid_line_interval: Option<GridLineInterval>,
}

#[derive(Debug, Clone)]
pub struct BarChartPoint {
    pub label: String,
    pub y: f64,
}

pub fn draw_bar_chart(options: &BarChartOptions) -> String {
    let width = options.width;
    let height = options.height;
    let chart_w = width - LEFT_PADDING - RIGHT_PADDING;
    let chart_h = height - TOP_PADDING - BOTTOM_PADDING;
    let chart_bottom = TOP_PADDING + chart_h;

    let data_max = options.data.iter().map(|p| p.y).fold(0.0_f64, f64::max);
    let y_max = options.y_max.unwrap_or(data_max);
    let y_max = if y_max > 0.0 { y_max } else { 1.0 };

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
        w = width,
        h = height,
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"<rect width="{}" height="{}" fill="white"/>"#,
        width, height,
    ));
    svg.push('\n');

    if let Some(title) = &options.title {
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="30" text-anchor="middle" font-size="20" font-weight="bold">{}</text>"#,
            width / 2.0,
            xml_escape(title),
        ));
        svg.push('\n');
    }

    // Horizontal grid lines with value labels on the y axis.
    let interval = options
        .y_axis_grid_line_interval
        .unwrap_or_else(|| compute_grid_line_interval(y_max, GRID_LINE_TARGET));
    let step = interval.value();
    let mut value = 0.0;
    while value <= y_max + step * 1e-6 {
        let y = chart_bottom - value / y_max * chart_h;
        svg.push_str(&format!(
            r##"<line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="#e5e5e5"/>"##,
            LEFT_PADDING,
            LEFT_PADDING + chart_w,
        ));
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" text-anchor="end" font-size="12">{}</text>"#,
            LEFT_PADDING - 8.0,
            y + 4.0,
            format_grid_value(value, interval),
        ));
        svg.push('\n');
        value += step;
    }

    if !options.data.is_empty() {
        let slot = chart_w / options.data.len() as f64;
        let bar_w = slot * (1.0 - BAR_GAP);
        for (i, point) in options.data.iter().enumerate() {
            let x = LEFT_PADDING + i as f64 * slot + (slot - bar_w) / 2.0;
            let bar_h = (point.y.max(0.0) / y_max * chart_h).min(chart_h);
            let label = xml_escape(&point.label);
            svg.push_str(&format!(
                r#"<rect class="bar" x="{x:.1}" y="{:.1}" width="{bar_w:.1}" height="{bar_h:.1}" fill="{}"><title>{label}: {:.1}</title></rect>"#,
                chart_bottom - bar_h,
                options.color,
                point.y,
            ));
            svg.push('\n');
            let label_x = LEFT_PADDING + i as f64 * slot + slot / 2.0;
            let label_y = chart_bottom + 14.0;
            svg.push_str(&format!(
                r#"<text x="{label_x:.1}" y="{label_y:.1}" transform="rotate(-45 {label_x:.1} {label_y:.1})" text-anchor="end" font-size="12">{label}</text>"#,
            ));
            svg.push('\n');
        }
    }

    // Axis lines drawn over the grid.
    svg.push_str(&format!(
        r#"<line x1="{x:.1}" y1="{:.1}" x2="{x:.1}" y2="{:.1}" stroke="black"/>"#,
        TOP_PADDING,
        chart_bottom,
        x = LEFT_PADDING,
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"<line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="black"/>"#,
        LEFT_PADDING,
        LEFT_PADDING + chart_w,
        y = chart_bottom,
    ));
    svg.push('\n');

    if let Some(x_axis_title) = &options.x_axis_title {
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="14">{}</text>"#,
            LEFT_PADDING + chart_w / 2.0,
            height - 16.0,
            xml_escape(x_axis_title),
        ));
        svg.push('\n');
    }
    if let Some(y_axis_title) = &options.y_axis_title {
        let mid = TOP_PADDING + chart_h / 2.0;
        svg.push_str(&format!(
            r#"<text x="22" y="{mid:.1}" transform="rotate(-90 22 {mid:.1})" text-anchor="middle" font-size="14">{}</text>"#,
            xml_escape(y_axis_title),
        ));
        svg.push('\n');
    }

    svg.push_str("</svg>");
    svg
}
