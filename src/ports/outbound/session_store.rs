use crate::shared::Result;
use crate::workload_analysis::domain::Session;

/// SessionStore port for the persisted login session
///
/// There is exactly one session at a time; `load` returning `None` means
/// the user is not logged in and every remote flow must refuse to run.
pub trait SessionStore {
    /// Loads the current session, if any
    fn load(&self) -> Result<Option<Session>>;

    /// Persists the session, replacing any previous one
    fn save(&self, session: &Session) -> Result<()>;

    /// Removes the persisted session (logout)
    fn clear(&self) -> Result<()>;
}
