use crate::application::read_models::DashboardView;
use crate::shared::Result;

/// DashboardFormatter port for serializing a dashboard view
///
/// Implementations turn the display-ready view into a concrete output
/// format (console table, CSV, print-ready markdown).
pub trait DashboardFormatter {
    /// Formats the dashboard view into its output representation
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, view: &DashboardView) -> Result<String>;
}
