use serde::{Deserialize, Serialize};

/// The locally persisted identity that gates every remote flow.
///
/// Loaded once per invocation and passed explicitly into the use cases; the
/// session file is the single source of truth and is rewritten whenever the
/// server confirms a profile change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    pub license_key: String,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

impl Session {
    pub fn new(email: String, license_key: String, name: Option<String>) -> Self {
        Self {
            email,
            name,
            license_key,
            profile_image_url: None,
        }
    }

    /// Initial shown when no avatar is set.
    pub fn avatar_initial(&self) -> char {
        self.name
            .as_deref()
            .and_then(|n| n.chars().next())
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('U')
    }
}
