//! HTML page generation
//!
//! Renders the dashboard as a single self-contained page with embedded CSS
//! and an inline SVG chart. No external assets, no scripts.

use crate::core::{DashboardView, RegionStats};
use crate::utils::error::DashboardError;

const PAGE_TITLE: &str = "Mantelzorg Dashboard";
const PAGE_DESCRIPTION: &str = "Dit dashboard toont gegevens over mantelzorgers in verschillende \
     gemeenten in Nederland. De gegevens zijn gebaseerd op data van het CBS.";

pub fn render_dashboard(view: &DashboardView) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="nl">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        {header}
        <section>
            <h2>Samenvatting van de Data</h2>
            <p>Aantal gemeenten in de dataset: <strong>{count}</strong></p>
            {preview}
        </section>
        <section>
            <h2>Visualisatie van Mantelzorg Ratio</h2>
            <div class="chart">{chart}</div>
        </section>
    </div>
</body>
</html>"#,
        title = PAGE_TITLE,
        css = inline_css(),
        header = render_header(),
        count = view.region_count,
        preview = render_preview_table(&view.preview),
        chart = view.chart_svg,
    )
}

pub fn render_error(error: &DashboardError) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="nl">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <div class="container">
        {header}
        <div class="error">{message}</div>
    </div>
</body>
</html>"#,
        title = PAGE_TITLE,
        css = inline_css(),
        header = render_header(),
        message = html_escape(error.user_friendly_message()),
    )
}

fn render_header() -> String {
    format!(
        r#"<header>
            <h1>{}</h1>
            <p class="description">{}</p>
        </header>"#,
        PAGE_TITLE, PAGE_DESCRIPTION,
    )
}

fn render_preview_table(rows: &[RegionStats]) -> String {
    let body: String = rows
        .iter()
        .map(|row| {
            format!(
                "<tr><td>{}</td><td>{}</td><td class=\"num\">{:.0}</td><td class=\"num\">{:.0}</td><td class=\"num\">{:.1}</td></tr>\n",
                html_escape(&row.code),
                html_escape(&row.municipality),
                row.population,
                row.caregivers,
                row.ratio,
            )
        })
        .collect();

    format!(
        r#"<table>
            <thead>
                <tr><th>Code</th><th>Gemeente</th><th>Bevolking</th><th>Mantelzorgers</th><th>Mantelzorg ratio</th></tr>
            </thead>
            <tbody>
{}            </tbody>
        </table>"#,
        body,
    )
}

fn inline_css() -> &'static str {
    r#"
* {
    box-sizing: border-box;
    margin: 0;
    padding: 0;
}

body {
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    line-height: 1.6;
    color: #111827;
    background: #ffffff;
}

.container {
    max-width: 1100px;
    margin: 0 auto;
    padding: 2rem;
}

header {
    margin-bottom: 2rem;
    padding-bottom: 1rem;
    border-bottom: 2px solid #e5e7eb;
}

header h1 {
    font-size: 2rem;
    font-weight: 700;
    margin-bottom: 0.5rem;
}

header .description {
    color: #6b7280;
}

section {
    margin-bottom: 2rem;
}

section h2 {
    font-size: 1.25rem;
    margin-bottom: 0.75rem;
}

table {
    border-collapse: collapse;
    margin-top: 0.75rem;
}

th, td {
    border: 1px solid #e5e7eb;
    padding: 0.375rem 0.75rem;
    text-align: left;
    font-size: 0.875rem;
}

th {
    background: #f9fafb;
}

td.num {
    text-align: right;
    font-variant-numeric: tabular-nums;
}

.chart svg {
    max-width: 100%;
    height: auto;
}

.error {
    background: #fef2f2;
    border: 1px solid #fecaca;
    color: #b91c1c;
    padding: 1rem;
    border-radius: 0.375rem;
}
"#
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(code: &str, municipality: &str, ratio: f64) -> RegionStats {
        RegionStats {
            code: code.to_string(),
            municipality: municipality.to_string(),
            population: 1000.0,
            caregivers: ratio,
            ratio,
        }
    }

    #[test]
    fn test_dashboard_page_contains_summary_and_chart() {
        let view = DashboardView {
            region_count: 342,
            preview: vec![stats("GM0363", "Amsterdam", 101.0)],
            chart_svg: "<svg data-test=\"chart\"></svg>".to_string(),
        };
        let html = render_dashboard(&view);

        assert!(html.contains("Mantelzorg Dashboard"));
        assert!(html.contains("Aantal gemeenten in de dataset: <strong>342</strong>"));
        assert!(html.contains("Amsterdam"));
        assert!(html.contains("data-test=\"chart\""));
        assert!(!html.contains("class=\"error\""));
    }

    #[test]
    fn test_error_page_shows_single_message() {
        let html = render_error(&DashboardError::FetchFailed { status: 404 });

        assert!(html.contains("Fout bij het ophalen van data van de CBS API."));
        assert_eq!(html.matches("class=\"error\"").count(), 1);
        assert!(!html.contains("<table>"));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn test_preview_table_escapes_municipality_names() {
        let view = DashboardView {
            region_count: 1,
            preview: vec![stats("GM0000", "A & B <Gemeente>", 1.0)],
            chart_svg: String::new(),
        };
        let html = render_dashboard(&view);

        assert!(html.contains("A &amp; B &lt;Gemeente&gt;"));
    }
}
