/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, file system, console).
pub mod account_gateway;
pub mod admin_gateway;
pub mod analysis_gateway;
pub mod dashboard_formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod results_gateway;
pub mod session_store;

pub use account_gateway::{AccountGateway, ProfileUpdate, UserProfile};
pub use admin_gateway::{AdminGateway, AdminUser, ReportEntry, ReportFilter, UserEdit};
pub use analysis_gateway::{AnalysisGateway, StartAck, UploadAck};
pub use dashboard_formatter::DashboardFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use results_gateway::ResultsGateway;
pub use session_store::SessionStore;
