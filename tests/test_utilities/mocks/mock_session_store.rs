use std::sync::{Arc, Mutex};

use sizewise::prelude::*;

/// Mock SessionStore holding the session in memory
#[derive(Default, Clone)]
pub struct MockSessionStore {
    session: Arc<Mutex<Option<Session>>>,
}

impl MockSessionStore {
    pub fn new(session: Option<Session>) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
        }
    }

    pub fn current(&self) -> Option<Session> {
        self.session.lock().unwrap().clone()
    }
}

impl SessionStore for MockSessionStore {
    fn load(&self) -> Result<Option<Session>> {
        Ok(self.session.lock().unwrap().clone())
    }

    fn save(&self, session: &Session) -> Result<()> {
        *self.session.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.session.lock().unwrap() = None;
        Ok(())
    }
}
