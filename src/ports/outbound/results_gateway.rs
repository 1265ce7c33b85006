use crate::shared::Result;
use crate::workload_analysis::domain::WorkloadRecord;
use async_trait::async_trait;

/// ResultsGateway port for fetching the precomputed result set
///
/// The summary is an ordered sequence of workload records; order is
/// preserved as served.
#[async_trait]
pub trait ResultsGateway {
    /// Fetches the full summary
    ///
    /// # Errors
    /// Returns an error if the fetch fails or the server responds with a
    /// non-success status; callers render an explicit empty state instead
    /// of propagating it further.
    async fn fetch_summary(&self) -> Result<Vec<WorkloadRecord>>;
}
