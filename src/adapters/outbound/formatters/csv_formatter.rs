use crate::application::read_models::{DashboardView, COLUMN_HEADERS};
use crate::ports::outbound::DashboardFormatter;
use crate::shared::Result;
use csv::WriterBuilder;

/// CsvFormatter adapter for the 12-column CSV export
///
/// Serializes the whole filtered view (not just the visible page) with the
/// fixed header row. Quoting follows standard CSV rules: fields containing
/// a comma, quote, or newline are double-quoted with embedded quotes
/// doubled; everything else is written bare.
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardFormatter for CsvFormatter {
    fn format(&self, view: &DashboardView) -> Result<String> {
        let mut writer = WriterBuilder::new().from_writer(Vec::new());

        writer.write_record(COLUMN_HEADERS)?;
        for row in &view.export_rows {
            writer.write_record(row.cells())?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e))?;
        Ok(String::from_utf8(bytes)?)
    }
}
