use crate::ports::outbound::SessionStore;
use crate::shared::error::ClientError;
use crate::shared::Result;
use crate::workload_analysis::domain::Session;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Directory under the home directory holding client state.
const STATE_DIR: &str = ".sizewise";
/// Session file name inside the state directory.
const SESSION_FILE: &str = "session.json";

/// FileSessionStore adapter persisting the session as a single JSON file
///
/// The default location is `~/.sizewise/session.json`; a config entry can
/// point somewhere else.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Resolves the default session path under the home directory.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(STATE_DIR)
            .join(SESSION_FILE)
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ClientError::FileReadError {
                    path: self.path.clone(),
                    details: e.to_string(),
                }
                .into())
            }
        };

        let session: Session =
            serde_json::from_str(&content).map_err(|e| ClientError::FileReadError {
                path: self.path.clone(),
                details: format!("corrupt session file: {}", e),
            })?;
        Ok(Some(session))
    }

    fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| ClientError::FileWriteError {
                path: self.path.clone(),
                details: e.to_string(),
            })?;
        }

        let content = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, content).map_err(|e| ClientError::FileWriteError {
            path: self.path.clone(),
            details: e.to_string(),
        })?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::FileWriteError {
                path: self.path.clone(),
                details: e.to_string(),
            }
            .into()),
        }
    }
}
