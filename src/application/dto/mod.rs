pub mod dashboard_query;
pub mod output_format;
pub mod submission_request;

pub use dashboard_query::DashboardQuery;
pub use output_format::OutputFormat;
pub use submission_request::SubmissionRequest;
