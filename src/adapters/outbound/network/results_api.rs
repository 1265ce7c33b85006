use crate::ports::outbound::ResultsGateway;
use crate::shared::error::ClientError;
use crate::shared::Result;
use crate::workload_analysis::domain::WorkloadRecord;
use async_trait::async_trait;
use std::time::Duration;

use super::{build_http_client, trim_base_url};

/// HttpResultsGateway adapter for the precomputed summary
///
/// Fetches `outputs/summary.json` with a bounded retry: the summary is
/// static once written, so a transient failure is worth a couple more
/// attempts before the dashboard gives up and renders its empty state.
pub struct HttpResultsGateway {
    client: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl HttpResultsGateway {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: build_http_client()?,
            base_url: trim_base_url(base_url),
            max_retries: 3,
        })
    }

    fn summary_url(&self) -> String {
        format!("{}/outputs/summary.json", self.base_url)
    }

    async fn fetch_once(&self) -> Result<Vec<WorkloadRecord>> {
        // Cache-busting timestamp, as the dashboard always wants the
        // freshest summary.
        let ts = chrono::Utc::now().timestamp_millis();
        let response = self
            .client
            .get(self.summary_url())
            .query(&[("ts", ts.to_string())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("summary endpoint returned status code {}", status);
        }

        let records: Vec<WorkloadRecord> = response.json().await?;
        Ok(records)
    }
}

#[async_trait]
impl ResultsGateway for HttpResultsGateway {
    async fn fetch_summary(&self) -> Result<Vec<WorkloadRecord>> {
        let mut last_error = None;

        for attempt in 1..=self.max_retries {
            match self.fetch_once().await {
                Ok(records) => return Ok(records),
                Err(e) => {
                    last_error = Some(e);
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(100 * attempt as u64)).await;
                    }
                }
            }
        }

        let details = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "summary.json not found".to_string());
        Err(ClientError::DataUnavailable {
            url: self.summary_url(),
            details,
        }
        .into())
    }
}
