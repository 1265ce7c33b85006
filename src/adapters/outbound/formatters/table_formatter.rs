use crate::application::read_models::{DashboardView, WorkloadRow, COLUMN_HEADERS};
use crate::ports::outbound::DashboardFormatter;
use crate::shared::Result;
use crate::workload_analysis::services::{ChartDataset, ChartKind};
use owo_colors::OwoColorize;
use std::fmt::Write;

/// TableFormatter adapter for the interactive console view
///
/// Renders the current page as a padded table, a pagination footer, and a
/// compact text summary of each chart dataset.
pub struct TableFormatter;

impl TableFormatter {
    pub fn new() -> Self {
        Self
    }

    fn display_cells(row: &WorkloadRow) -> Vec<String> {
        let mut cells: Vec<String> = row.cells().iter().map(|c| c.to_string()).collect();
        // The cost column carries a currency prefix on screen only.
        if cells[11] != "-" {
            cells[11] = format!("${}", cells[11]);
        }
        cells
    }

    fn column_widths(rows: &[Vec<String>]) -> Vec<usize> {
        let mut widths: Vec<usize> = COLUMN_HEADERS.iter().map(|h| h.len()).collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
        widths
    }

    fn write_row(out: &mut String, cells: &[String], widths: &[usize]) {
        let line = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "{}", line.trim_end());
    }

    fn write_charts(out: &mut String, charts: &[ChartDataset]) {
        if charts.is_empty() {
            return;
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", "Charts".bold());
        for dataset in charts {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", dataset.title.underline());
            if dataset.points.is_empty() {
                let _ = writeln!(out, "  (no data)");
                continue;
            }
            let total: f64 = dataset.points.iter().map(|p| p.value).sum();
            for point in &dataset.points {
                match dataset.kind {
                    ChartKind::Proportion if total > 0.0 => {
                        let _ = writeln!(
                            out,
                            "  {:<24} {:>12} ({:.1}%)",
                            point.label,
                            format_value(point.value),
                            100.0 * point.value / total
                        );
                    }
                    _ => {
                        let _ = writeln!(
                            out,
                            "  {:<24} {:>12}",
                            point.label,
                            format_value(point.value)
                        );
                    }
                }
            }
        }
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Integer values print bare; everything else keeps two decimals.
fn format_value(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

impl DashboardFormatter for TableFormatter {
    fn format(&self, view: &DashboardView) -> Result<String> {
        let mut out = String::new();

        if let Some(details) = &view.unavailable {
            let _ = writeln!(out, "{}", "No results available".red().bold());
            let _ = writeln!(out, "{}", details.red());
            return Ok(out);
        }

        let rows: Vec<Vec<String>> = view.page_rows.iter().map(Self::display_cells).collect();
        let widths = Self::column_widths(&rows);

        let header: Vec<String> = COLUMN_HEADERS.iter().map(|h| h.to_string()).collect();
        Self::write_row(&mut out, &header, &widths);
        let _ = writeln!(out, "{}", "-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));

        if rows.is_empty() {
            let _ = writeln!(out, "(no matching records)");
        }
        for row in &rows {
            Self::write_row(&mut out, row, &widths);
        }

        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Page {} of {} — {} of {} record(s){}{}",
            view.page,
            view.total_pages,
            view.filtered_count,
            view.total_count,
            if view.has_prev { "  [--page -1]" } else { "" },
            if view.has_next { "  [--page +1]" } else { "" },
        );

        Self::write_charts(&mut out, &view.charts);

        Ok(out)
    }
}
