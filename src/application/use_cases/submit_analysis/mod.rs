use std::time::Duration;

use crate::application::dto::SubmissionRequest;
use crate::ports::outbound::{AnalysisGateway, ProgressReporter};
use crate::shared::error::ClientError;
use crate::shared::{CancellationFlag, Result};
use crate::workload_analysis::domain::ValidatedSubmission;

/// Pause between the completion message and opening the results view.
pub const RESULTS_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

/// Default pause between progress polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Default ceiling on poll attempts (30 minutes at the default interval).
pub const DEFAULT_POLL_MAX_ATTEMPTS: u32 = 900;

/// Pacing and bounds for the progress polling loop.
#[derive(Debug, Clone)]
pub struct PollPolicy {
    pub interval: Duration,
    /// None removes the ceiling; the loop then runs until completion
    /// or cancellation
    pub max_attempts: Option<u32>,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: Some(DEFAULT_POLL_MAX_ATTEMPTS),
        }
    }
}

/// How a submission ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The server reported 100 percent
    Completed { polls: u32 },
    /// The user tore the client down mid-poll; the job keeps running
    /// server-side
    Cancelled,
}

/// SubmitAnalysisUseCase - the canonical submission state machine
///
/// Drives Idle → Validating → Uploading → AnalysisStarting → Polling →
/// Complete, with a distinct failure per pre-polling state. Polling is a
/// single-in-flight loop: the next poll is issued only after the previous
/// response resolves, transient failures are reported and retried, and the
/// loop ends exactly once, on completion, cancellation, or the max-attempts
/// bound.
///
/// # Type Parameters
/// * `AG` - AnalysisGateway implementation
/// * `PR` - ProgressReporter implementation
pub struct SubmitAnalysisUseCase<AG, PR> {
    gateway: AG,
    progress_reporter: PR,
    policy: PollPolicy,
    cancel: CancellationFlag,
}

impl<AG, PR> SubmitAnalysisUseCase<AG, PR>
where
    AG: AnalysisGateway,
    PR: ProgressReporter,
{
    pub fn new(gateway: AG, progress_reporter: PR, policy: PollPolicy, cancel: CancellationFlag) -> Self {
        Self {
            gateway,
            progress_reporter,
            policy,
            cancel,
        }
    }

    /// Executes the submission flow
    ///
    /// # Arguments
    /// * `request` - Raw user input; validated before any gateway call
    ///
    /// # Returns
    /// The submission outcome (completed or cancelled)
    pub async fn execute(&self, request: SubmissionRequest) -> Result<SubmissionOutcome> {
        let submission = request.validate()?;

        self.upload_input(&submission).await?;
        self.start_analysis(&submission).await?;
        self.poll_until_complete().await
    }

    /// Upload step; the server must acknowledge with status "uploaded".
    async fn upload_input(&self, submission: &ValidatedSubmission) -> Result<()> {
        self.progress_reporter.report(&format!(
            "⏳ Uploading input and preparing analysis... (job type: {})",
            submission.job_type
        ));

        let ack = self
            .gateway
            .upload(submission)
            .await
            .map_err(|e| ClientError::Upload {
                message: e.to_string(),
            })?;

        if !ack.is_uploaded() {
            return Err(ClientError::Upload {
                message: ack.message.unwrap_or_else(|| "Upload failed".to_string()),
            }
            .into());
        }

        self.progress_reporter
            .report("✅ Upload successful. Starting analysis...");
        Ok(())
    }

    /// Analyze-start step; the server must answer with status "started".
    async fn start_analysis(&self, submission: &ValidatedSubmission) -> Result<()> {
        let ack = self
            .gateway
            .start_analysis(submission)
            .await
            .map_err(|e| ClientError::AnalysisStart {
                message: e.to_string(),
            })?;

        if !ack.is_started() {
            return Err(ClientError::AnalysisStart {
                message: "Failed to start analysis.".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Single-in-flight polling loop.
    ///
    /// Each iteration awaits one progress sample, reports it, and only then
    /// sleeps for the configured interval, so polls never overlap. A failed
    /// poll is a warning, not a terminal error; only cancellation or the
    /// max-attempts ceiling ends the loop without completion.
    async fn poll_until_complete(&self) -> Result<SubmissionOutcome> {
        let mut attempts: u32 = 0;

        loop {
            if self.cancel.is_cancelled() {
                self.progress_reporter.report_error(
                    "⚠️  Submission cancelled. The job keeps running on the server; check the dashboard later.",
                );
                return Ok(SubmissionOutcome::Cancelled);
            }

            match self.gateway.fetch_progress().await {
                Ok(progress) => {
                    let percent = progress.display_percent() as usize;
                    self.progress_reporter.report_progress(
                        percent,
                        100,
                        Some(&format!("{} ({}%)", progress.message, percent)),
                    );

                    if progress.is_complete() {
                        self.progress_reporter
                            .report_completion("✅ Analysis complete! Opening results...");
                        return Ok(SubmissionOutcome::Completed {
                            polls: attempts + 1,
                        });
                    }
                }
                Err(e) => {
                    // Transient by design: a network blip must not cancel an
                    // in-flight job.
                    self.progress_reporter
                        .report_error(&format!("⚠️  Progress polling failed: {}", e));
                }
            }

            attempts += 1;
            if let Some(max) = self.policy.max_attempts {
                if attempts >= max {
                    return Err(ClientError::ProgressStalled { attempts }.into());
                }
            }

            tokio::time::sleep(self.policy.interval).await;
        }
    }
}
