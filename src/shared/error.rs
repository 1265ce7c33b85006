use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI systems to distinguish between
/// different types of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the requested operation completed
    Success = 0,
    /// The analysis flow failed (validation, upload, start, or stalled progress)
    AnalysisFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::AnalysisFailed => write!(f, "Analysis Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the SizeWise client.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Required input was missing; raised before any network call is made
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Upload was rejected by the server: {message}\n\n💡 Hint: Verify that the report files are readable and re-submit")]
    Upload { message: String },

    #[error("The server did not start the analysis: {message}\n\n💡 Hint: Re-submit the request; if the problem persists, check the service status")]
    AnalysisStart { message: String },

    #[error("Analysis progress stalled after {attempts} poll attempt(s)\n\n💡 Hint: The job may still be running on the server. Check the dashboard later for results")]
    ProgressStalled { attempts: u32 },

    #[error("Results are unavailable from {url}\nDetails: {details}\n\n💡 Hint: Run an analysis first, or verify the service URL")]
    DataUnavailable { url: String, details: String },

    #[error("Not logged in\n\n💡 Hint: Run `sizewise login --email <email> --license-key <key>` first")]
    NotLoggedIn,

    #[error("The server rejected the request: {details}")]
    Api { details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

impl ClientError {
    /// Maps an error variant to the process exit code reported to the shell.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ClientError::Validation { .. }
            | ClientError::Upload { .. }
            | ClientError::AnalysisStart { .. }
            | ClientError::ProgressStalled { .. } => ExitCode::AnalysisFailed,
            _ => ExitCode::ApplicationError,
        }
    }
}
