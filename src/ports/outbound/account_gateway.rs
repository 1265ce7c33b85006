use std::path::Path;

use crate::shared::Result;
use crate::workload_analysis::domain::Session;
use async_trait::async_trait;
use serde::Deserialize;

/// Profile payload returned by the account endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    /// Set when the server rejected the request
    #[serde(default)]
    pub error: Option<String>,
}

/// Requested profile changes; empty fields are left untouched server-side.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub new_name: Option<String>,
    pub new_email: Option<String>,
    pub old_password: Option<String>,
    pub new_password: Option<String>,
}

/// AccountGateway port for profile read/update and avatar upload
#[async_trait]
pub trait AccountGateway {
    /// Fetches the profile for the session identity
    async fn fetch_profile(&self, session: &Session) -> Result<UserProfile>;

    /// Applies profile changes and returns the server-confirmed profile
    async fn update_profile(
        &self,
        session: &Session,
        update: &ProfileUpdate,
    ) -> Result<UserProfile>;

    /// Uploads a new avatar image and returns the updated profile
    async fn upload_avatar(&self, session: &Session, image: &Path) -> Result<UserProfile>;
}
