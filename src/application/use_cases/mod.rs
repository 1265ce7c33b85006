pub mod load_dashboard;
pub mod manage_profile;
pub mod manage_users;
pub mod submit_analysis;

pub use load_dashboard::LoadDashboardUseCase;
pub use manage_profile::ProfileUseCase;
pub use manage_users::AdminUseCase;
pub use submit_analysis::{
    PollPolicy, SubmissionOutcome, SubmitAnalysisUseCase, DEFAULT_POLL_INTERVAL,
    DEFAULT_POLL_MAX_ATTEMPTS, RESULTS_REDIRECT_DELAY,
};
