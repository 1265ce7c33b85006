use async_trait::async_trait;
use sizewise::prelude::*;

/// Mock ResultsGateway serving a canned record set or a scripted failure
pub struct MockResultsGateway {
    records: Option<Vec<WorkloadRecord>>,
}

impl MockResultsGateway {
    pub fn new(records: Vec<WorkloadRecord>) -> Self {
        Self {
            records: Some(records),
        }
    }

    pub fn with_failure() -> Self {
        Self { records: None }
    }
}

#[async_trait]
impl ResultsGateway for MockResultsGateway {
    async fn fetch_summary(&self) -> Result<Vec<WorkloadRecord>> {
        match &self.records {
            Some(records) => Ok(records.clone()),
            None => anyhow::bail!("summary.json not found"),
        }
    }
}
