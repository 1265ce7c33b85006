mod mock_account_gateway;
mod mock_analysis_gateway;
mod mock_progress_reporter;
mod mock_results_gateway;
mod mock_session_store;

pub use mock_account_gateway::MockAccountGateway;
pub use mock_analysis_gateway::MockAnalysisGateway;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_results_gateway::MockResultsGateway;
pub use mock_session_store::MockSessionStore;
