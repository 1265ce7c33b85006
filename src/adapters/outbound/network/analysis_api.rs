use crate::ports::outbound::{AnalysisGateway, StartAck, UploadAck};
use crate::shared::error::ClientError;
use crate::shared::Result;
use crate::workload_analysis::domain::{ProgressState, ValidatedSubmission};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use super::{build_http_client, trim_base_url};

/// HttpAnalysisGateway adapter for the upload/analyze/progress endpoints
///
/// Implements the AnalysisGateway port over the service's multipart API.
/// Files are read from disk at upload time; the request itself carries the
/// raw bytes, mirroring a browser form submission.
pub struct HttpAnalysisGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAnalysisGateway {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: build_http_client()?,
            base_url: trim_base_url(base_url),
        })
    }

    /// Builds the multipart form shared by the upload step.
    async fn upload_form(&self, submission: &ValidatedSubmission) -> Result<Form> {
        let mut form = Form::new().text("cloud", submission.cloud.as_str());

        if let Some(email) = &submission.user_email {
            form = form.text("user_email", email.clone());
        }

        for path in &submission.files {
            let bytes = tokio::fs::read(path)
                .await
                .map_err(|e| ClientError::FileReadError {
                    path: path.clone(),
                    details: e.to_string(),
                })?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| "report".to_string());
            form = form.part("files", Part::bytes(bytes).file_name(file_name));
        }

        if let Some(metrics) = &submission.manual {
            form = form
                .text("vcpu", metrics.vcpu.clone())
                .text("memory", metrics.memory.clone())
                .text("iops", metrics.iops.clone())
                .text("throughput", metrics.throughput.clone());
        }

        Ok(form.text("job_type", submission.job_type.as_str()))
    }
}

#[async_trait]
impl AnalysisGateway for HttpAnalysisGateway {
    async fn upload(&self, submission: &ValidatedSubmission) -> Result<UploadAck> {
        let form = self.upload_form(submission).await?;
        let url = format!("{}/upload-awrs", self.base_url);
        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            // The server still sends a JSON body with a message on rejection.
            let message = response
                .json::<UploadAck>()
                .await
                .ok()
                .and_then(|ack| ack.message)
                .unwrap_or_else(|| format!("upload endpoint returned status code {}", status));
            anyhow::bail!("{}", message);
        }

        let ack: UploadAck = response.json().await?;
        Ok(ack)
    }

    async fn start_analysis(&self, submission: &ValidatedSubmission) -> Result<StartAck> {
        let mut form = Form::new()
            .text("cloud", submission.cloud.as_str())
            .text("job_type", submission.job_type.as_str());
        if let Some(email) = &submission.user_email {
            form = form.text("user_email", email.clone());
        }

        let url = format!("{}/analyze", self.base_url);
        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("analyze endpoint returned status code {}", status);
        }

        let ack: StartAck = response.json().await?;
        Ok(ack)
    }

    async fn fetch_progress(&self) -> Result<ProgressState> {
        let url = format!("{}/progress", self.base_url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("progress endpoint returned status code {}", status);
        }

        let progress: ProgressState = response.json().await?;
        Ok(progress)
    }
}
