use crate::adapters::outbound::formatters::{CsvFormatter, MarkdownReportFormatter, TableFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::DashboardFormatter;

/// Factory for creating dashboard formatters
///
/// Encapsulates the selection of the infrastructure adapter that matches
/// the requested output format.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    pub fn create(format: OutputFormat) -> Box<dyn DashboardFormatter> {
        match format {
            OutputFormat::Table => Box::new(TableFormatter::new()),
            OutputFormat::Csv => Box::new(CsvFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownReportFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Table => "📝 Rendering dashboard table...",
            OutputFormat::Csv => "📝 Exporting filtered view as CSV...",
            OutputFormat::Markdown => "📝 Generating print-ready report...",
        }
    }
}
