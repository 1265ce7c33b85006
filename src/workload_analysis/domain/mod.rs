pub mod cloud_target;
pub mod job;
pub mod numeric;
pub mod record;
pub mod session;
pub mod submission;

pub use cloud_target::CloudTarget;
pub use job::{JobType, ProgressState};
pub use numeric::safe_numeric;
pub use record::{cell_text, WorkloadRecord};
pub use session::Session;
pub use submission::{ManualMetrics, ValidatedSubmission};
