use crate::application::read_models::{DashboardView, COLUMN_HEADERS};
use crate::ports::outbound::DashboardFormatter;
use crate::shared::Result;
use crate::workload_analysis::services::ChartDataset;
use std::fmt::Write;

/// MarkdownReportFormatter adapter for the print view
///
/// Produces a print-ready Markdown report of the whole filtered view plus
/// the chart summaries; the host environment takes it from there (pager,
/// printer, PDF converter).
pub struct MarkdownReportFormatter;

impl MarkdownReportFormatter {
    pub fn new() -> Self {
        Self
    }

    fn write_charts(out: &mut String, charts: &[ChartDataset]) {
        if charts.is_empty() {
            return;
        }
        let _ = writeln!(out, "## Charts");
        let _ = writeln!(out);
        for dataset in charts {
            let _ = writeln!(out, "### {}", dataset.title);
            let _ = writeln!(out);
            let _ = writeln!(out, "| Label | Value |");
            let _ = writeln!(out, "| --- | ---: |");
            for point in &dataset.points {
                let _ = writeln!(out, "| {} | {:.2} |", point.label, point.value);
            }
            let _ = writeln!(out);
        }
    }
}

impl Default for MarkdownReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardFormatter for MarkdownReportFormatter {
    fn format(&self, view: &DashboardView) -> Result<String> {
        let mut out = String::new();
        let _ = writeln!(out, "# SizeWise Workload Summary");
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Generated: {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        );
        let _ = writeln!(out);

        if let Some(details) = &view.unavailable {
            let _ = writeln!(out, "**No results available.** {}", details);
            return Ok(out);
        }

        let _ = writeln!(
            out,
            "{} of {} record(s) shown.",
            view.filtered_count, view.total_count
        );
        let _ = writeln!(out);

        let _ = writeln!(out, "| {} |", COLUMN_HEADERS.join(" | "));
        let _ = writeln!(
            out,
            "|{}|",
            COLUMN_HEADERS.map(|_| " --- ").join("|")
        );
        for row in &view.export_rows {
            let _ = writeln!(out, "| {} |", row.cells().join(" | "));
        }
        let _ = writeln!(out);

        Self::write_charts(&mut out, &view.charts);

        Ok(out)
    }
}
