use serde::Deserialize;

/// Classification of an analysis request by its input sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobType {
    /// Report files only
    Upload,
    /// Manually entered metrics only
    Manual,
    /// Both files and manual metrics
    Mixed,
}

impl JobType {
    /// Derives the job type from the presence of each input source.
    ///
    /// At least one source must be present; the submission validator
    /// guarantees that before this is called.
    pub fn derive(has_files: bool, has_manual: bool) -> Self {
        match (has_files, has_manual) {
            (true, true) => JobType::Mixed,
            (false, true) => JobType::Manual,
            _ => JobType::Upload,
        }
    }

    /// Wire name sent in the `job_type` form field.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Upload => "upload",
            JobType::Manual => "manual",
            JobType::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for JobType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One progress sample from the analysis service.
///
/// Transient by design: polled, displayed, and dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct ProgressState {
    #[serde(default)]
    pub percent: f64,
    #[serde(default)]
    pub message: String,
}

impl ProgressState {
    /// Percent clamped into the displayable 0..=100 range.
    pub fn display_percent(&self) -> u64 {
        if !self.percent.is_finite() || self.percent < 0.0 {
            return 0;
        }
        self.percent.min(100.0).round() as u64
    }

    /// The job is finished once the server reports 100 percent or more.
    pub fn is_complete(&self) -> bool {
        self.percent >= 100.0
    }
}
