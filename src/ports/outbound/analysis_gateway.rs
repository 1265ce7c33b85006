use crate::shared::Result;
use crate::workload_analysis::domain::{ProgressState, ValidatedSubmission};
use async_trait::async_trait;
use serde::Deserialize;

/// Server acknowledgement of the upload step.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadAck {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl UploadAck {
    pub fn is_uploaded(&self) -> bool {
        self.status == "uploaded"
    }
}

/// Server acknowledgement of the analyze-start step.
#[derive(Debug, Clone, Deserialize)]
pub struct StartAck {
    #[serde(default)]
    pub status: String,
}

impl StartAck {
    pub fn is_started(&self) -> bool {
        self.status == "started"
    }
}

/// AnalysisGateway port for driving a server-side analysis job
///
/// This port abstracts the three remote steps of the submission flow:
/// uploading the input, starting the job, and sampling its progress.
/// Upload must succeed before start is attempted; start must succeed
/// before progress is polled.
#[async_trait]
pub trait AnalysisGateway {
    /// Uploads report files and/or manual metrics for the submission
    ///
    /// # Returns
    /// The server's acknowledgement; callers must check `is_uploaded()`
    async fn upload(&self, submission: &ValidatedSubmission) -> Result<UploadAck>;

    /// Asks the server to start analyzing the uploaded input
    async fn start_analysis(&self, submission: &ValidatedSubmission) -> Result<StartAck>;

    /// Samples the progress of the running job
    async fn fetch_progress(&self) -> Result<ProgressState>;
}
