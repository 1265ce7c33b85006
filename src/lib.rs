//! sizewise - terminal client for the SizeWise workload sizing service
//!
//! This library drives the SizeWise analysis API: submitting database
//! performance reports (or manual metrics) for sizing, polling job progress,
//! and aggregating the result set into a filterable, exportable dashboard.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - **Domain Layer** (`workload_analysis`): workload records and the pure
//!   filtering/pagination/aggregation services
//! - **Application Layer** (`application`): use cases, DTOs, read models
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): network, console, and filesystem
//!   implementations of the ports
//! - **Shared** (`shared`): common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sizewise::prelude::*;
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let gateway = HttpAnalysisGateway::new("http://localhost:8000")?;
//! let reporter = StderrProgressReporter::new();
//! let use_case = SubmitAnalysisUseCase::new(
//!     gateway,
//!     reporter,
//!     PollPolicy::default(),
//!     CancellationFlag::new(),
//! );
//!
//! let request = SubmissionRequest::new(
//!     Some(CloudTarget::Aws),
//!     vec![PathBuf::from("awr_prod.html")],
//!     None,
//!     Some("dba@example.com".to_string()),
//! );
//! let outcome = use_case.execute(request).await?;
//! println!("{:?}", outcome);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;
pub mod workload_analysis;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSessionStore, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        CsvFormatter, MarkdownReportFormatter, TableFormatter,
    };
    pub use crate::adapters::outbound::network::{
        HttpAccountGateway, HttpAdminGateway, HttpAnalysisGateway, HttpResultsGateway,
    };
    pub use crate::application::dto::{DashboardQuery, OutputFormat, SubmissionRequest};
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::read_models::{DashboardView, WorkloadRow, COLUMN_HEADERS};
    pub use crate::application::use_cases::{
        AdminUseCase, LoadDashboardUseCase, PollPolicy, ProfileUseCase, SubmissionOutcome,
        SubmitAnalysisUseCase,
    };
    pub use crate::ports::outbound::{
        AccountGateway, AdminGateway, AdminUser, AnalysisGateway, DashboardFormatter,
        OutputPresenter, ProfileUpdate, ProgressReporter, ReportEntry, ReportFilter,
        ResultsGateway, SessionStore, StartAck, UploadAck, UserEdit, UserProfile,
    };
    pub use crate::shared::{CancellationFlag, Result};
    pub use crate::workload_analysis::domain::{
        safe_numeric, CloudTarget, JobType, ManualMetrics, ProgressState, Session,
        ValidatedSubmission, WorkloadRecord,
    };
    pub use crate::workload_analysis::services::{
        build_chart_datasets, ChartDataset, ChartKind, DashboardState, FilterCriteria,
    };
}
