//! Dashboard read model for display and export
//!
//! Denormalized, display-ready view of the dashboard state, consumed by the
//! table/CSV/markdown formatters.

use crate::workload_analysis::domain::record::cell_text;
use crate::workload_analysis::domain::WorkloadRecord;
use crate::workload_analysis::services::{
    build_chart_datasets, ChartDataset, DashboardState,
};

/// Column headers, in table and CSV order.
pub const COLUMN_HEADERS: [&str; 12] = [
    "Source",
    "DB Name",
    "Cloud",
    "Estimated vCPUs",
    "Memory (GB)",
    "Total IOPS",
    "Throughput (MB/s)",
    "Recommended VM",
    "VM vCPUs",
    "VM Memory (GB)",
    "Category",
    "Monthly Cost (USD)",
];

/// One display-ready row; every cell is already a string, with "-" standing
/// in for absent values. The cost cell stays raw (no currency prefix) so CSV
/// export round-trips; the table formatter adds the "$" when rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadRow {
    pub source: String,
    pub db_name: String,
    pub cloud: String,
    pub estimated_vcpus: String,
    pub memory_gb: String,
    pub total_iops: String,
    pub throughput_mbs: String,
    pub recommended_vm: String,
    pub vm_vcpus: String,
    pub vm_memory_gb: String,
    pub category: String,
    pub monthly_cost: String,
}

impl WorkloadRow {
    pub fn from_record(record: &WorkloadRecord) -> Self {
        let text = |field: &Option<String>| {
            field
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or("-")
                .to_string()
        };
        Self {
            source: text(&record.source),
            db_name: text(&record.db_name),
            cloud: text(&record.cloud),
            estimated_vcpus: cell_text(&record.estimated_vcpus),
            memory_gb: cell_text(&record.memory_gb),
            total_iops: cell_text(&record.total_iops),
            throughput_mbs: cell_text(&record.throughput_mbs),
            recommended_vm: text(&record.recommended_vm),
            vm_vcpus: cell_text(&record.vm_vcpus),
            vm_memory_gb: cell_text(&record.vm_memory_gb),
            category: text(&record.category),
            monthly_cost: cell_text(&record.monthly_cost_usd),
        }
    }

    /// Cells in column order, matching `COLUMN_HEADERS`.
    pub fn cells(&self) -> [&str; 12] {
        [
            &self.source,
            &self.db_name,
            &self.cloud,
            &self.estimated_vcpus,
            &self.memory_gb,
            &self.total_iops,
            &self.throughput_mbs,
            &self.recommended_vm,
            &self.vm_vcpus,
            &self.vm_memory_gb,
            &self.category,
            &self.monthly_cost,
        ]
    }
}

/// Display-ready dashboard view: the current table page, the full filtered
/// view for exports, pagination facts, and the derived chart datasets.
#[derive(Debug, Clone)]
pub struct DashboardView {
    /// Set when the summary could not be fetched; formatters render an
    /// explicit empty state instead of a table
    pub unavailable: Option<String>,
    pub page_rows: Vec<WorkloadRow>,
    pub export_rows: Vec<WorkloadRow>,
    pub page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub total_count: usize,
    pub has_prev: bool,
    pub has_next: bool,
    pub charts: Vec<ChartDataset>,
}

impl DashboardView {
    pub fn from_state(state: &DashboardState, include_charts: bool) -> Self {
        let charts = if include_charts {
            build_chart_datasets(state.chart_records())
        } else {
            Vec::new()
        };
        Self {
            unavailable: None,
            page_rows: state.page_rows().iter().map(WorkloadRow::from_record).collect(),
            export_rows: state
                .filtered_records()
                .iter()
                .map(WorkloadRow::from_record)
                .collect(),
            page: state.current_page(),
            total_pages: state.total_pages(),
            filtered_count: state.filtered_records().len(),
            total_count: state.all_records().len(),
            has_prev: state.has_prev(),
            has_next: state.has_next(),
            charts,
        }
    }

    pub fn unavailable(details: String) -> Self {
        Self {
            unavailable: Some(details),
            page_rows: Vec::new(),
            export_rows: Vec::new(),
            page: 1,
            total_pages: 1,
            filtered_count: 0,
            total_count: 0,
            has_prev: false,
            has_next: false,
            charts: Vec::new(),
        }
    }

    /// True when there is nothing to export.
    pub fn is_empty(&self) -> bool {
        self.export_rows.is_empty()
    }
}
