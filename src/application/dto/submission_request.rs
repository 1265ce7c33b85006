use std::path::PathBuf;

use crate::shared::error::ClientError;
use crate::shared::Result;
use crate::workload_analysis::domain::{CloudTarget, JobType, ManualMetrics, ValidatedSubmission};

/// SubmissionRequest - Internal request DTO for the submission use case
///
/// Collects raw user input exactly as entered; `validate` turns it into an
/// immutable `ValidatedSubmission` or fails before any network call is made.
#[derive(Debug, Clone, Default)]
pub struct SubmissionRequest {
    pub cloud: Option<CloudTarget>,
    pub files: Vec<PathBuf>,
    pub manual: Option<ManualMetrics>,
    pub user_email: Option<String>,
}

impl SubmissionRequest {
    pub fn new(
        cloud: Option<CloudTarget>,
        files: Vec<PathBuf>,
        manual: Option<ManualMetrics>,
        user_email: Option<String>,
    ) -> Self {
        Self {
            cloud,
            files,
            manual,
            user_email,
        }
    }

    /// Validates the request: a cloud target must be selected and at least
    /// one input source (files or manual metrics) must be present.
    pub fn validate(self) -> Result<ValidatedSubmission> {
        let Some(cloud) = self.cloud else {
            return Err(ClientError::Validation {
                message: "Please select a cloud platform.".to_string(),
            }
            .into());
        };

        let manual = self.manual.filter(ManualMetrics::is_present);
        if self.files.is_empty() && manual.is_none() {
            return Err(ClientError::Validation {
                message: "Please provide report files or manual metrics.".to_string(),
            }
            .into());
        }

        let job_type = JobType::derive(!self.files.is_empty(), manual.is_some());

        Ok(ValidatedSubmission {
            cloud,
            job_type,
            files: self.files,
            manual,
            user_email: self.user_email,
        })
    }
}
