use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sizewise::prelude::*;

/// Mock AnalysisGateway with a scripted progress sequence
pub struct MockAnalysisGateway {
    progress_script: Mutex<Vec<(f64, String)>>,
    pub upload_calls: Arc<AtomicUsize>,
    pub start_calls: Arc<AtomicUsize>,
    pub poll_calls: Arc<AtomicUsize>,
}

impl MockAnalysisGateway {
    pub fn new(progress_script: Vec<(f64, &str)>) -> Self {
        Self {
            progress_script: Mutex::new(
                progress_script
                    .into_iter()
                    .map(|(percent, message)| (percent, message.to_string()))
                    .collect(),
            ),
            upload_calls: Arc::new(AtomicUsize::new(0)),
            start_calls: Arc::new(AtomicUsize::new(0)),
            poll_calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl AnalysisGateway for MockAnalysisGateway {
    async fn upload(&self, _submission: &ValidatedSubmission) -> Result<UploadAck> {
        self.upload_calls.fetch_add(1, Ordering::Relaxed);
        Ok(UploadAck {
            status: "uploaded".to_string(),
            message: None,
        })
    }

    async fn start_analysis(&self, _submission: &ValidatedSubmission) -> Result<StartAck> {
        self.start_calls.fetch_add(1, Ordering::Relaxed);
        Ok(StartAck {
            status: "started".to_string(),
        })
    }

    async fn fetch_progress(&self) -> Result<ProgressState> {
        self.poll_calls.fetch_add(1, Ordering::Relaxed);
        let mut script = self.progress_script.lock().unwrap();
        if script.is_empty() {
            anyhow::bail!("progress script exhausted");
        }
        let (percent, message) = script.remove(0);
        Ok(ProgressState { percent, message })
    }
}
