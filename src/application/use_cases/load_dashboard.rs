use crate::application::dto::DashboardQuery;
use crate::application::read_models::DashboardView;
use crate::ports::outbound::{ProgressReporter, ResultsGateway};
use crate::shared::Result;
use crate::workload_analysis::services::DashboardState;

/// LoadDashboardUseCase - fetch the summary and derive the dashboard view
///
/// A failed fetch is reported and yields an explicit unavailable view; it is
/// never propagated to the caller, so the page always renders something.
///
/// # Type Parameters
/// * `RG` - ResultsGateway implementation
/// * `PR` - ProgressReporter implementation
pub struct LoadDashboardUseCase<RG, PR> {
    results_gateway: RG,
    progress_reporter: PR,
}

impl<RG, PR> LoadDashboardUseCase<RG, PR>
where
    RG: ResultsGateway,
    PR: ProgressReporter,
{
    pub fn new(results_gateway: RG, progress_reporter: PR) -> Self {
        Self {
            results_gateway,
            progress_reporter,
        }
    }

    pub async fn execute(&self, query: DashboardQuery) -> Result<DashboardView> {
        self.progress_reporter.report("📖 Loading analysis summary...");

        let records = match self.results_gateway.fetch_summary().await {
            Ok(records) => records,
            Err(e) => {
                self.progress_reporter
                    .report_error(&format!("❌ Failed to load summary: {}", e));
                return Ok(DashboardView::unavailable(e.to_string()));
            }
        };

        self.progress_reporter
            .report(&format!("✅ Loaded {} workload record(s)", records.len()));

        let mut state = DashboardState::new(records, query.page_size);
        if !query.criteria.is_empty() {
            state.apply_filters(query.criteria.clone());
        }
        state.set_page(query.page);

        Ok(DashboardView::from_state(&state, query.include_charts))
    }
}
