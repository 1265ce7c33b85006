use std::path::Path;

use async_trait::async_trait;
use sizewise::prelude::*;

/// Mock AccountGateway returning scripted profile payloads
pub struct MockAccountGateway {
    profile: UserProfile,
}

impl MockAccountGateway {
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            profile: UserProfile {
                name: Some(name.to_string()),
                email: Some(email.to_string()),
                profile_image_url: None,
                error: None,
            },
        }
    }

    pub fn with_error(details: &str) -> Self {
        Self {
            profile: UserProfile {
                error: Some(details.to_string()),
                ..Default::default()
            },
        }
    }
}

#[async_trait]
impl AccountGateway for MockAccountGateway {
    async fn fetch_profile(&self, _session: &Session) -> Result<UserProfile> {
        Ok(self.profile.clone())
    }

    async fn update_profile(
        &self,
        _session: &Session,
        update: &ProfileUpdate,
    ) -> Result<UserProfile> {
        // Echo the requested changes back, the way the live service confirms
        // an update.
        let mut confirmed = self.profile.clone();
        if let Some(name) = &update.new_name {
            confirmed.name = Some(name.clone());
        }
        if let Some(email) = &update.new_email {
            confirmed.email = Some(email.clone());
        }
        Ok(confirmed)
    }

    async fn upload_avatar(&self, _session: &Session, image: &Path) -> Result<UserProfile> {
        let mut confirmed = self.profile.clone();
        if confirmed.error.is_none() {
            confirmed.profile_image_url =
                Some(format!("/uploads/{}", image.file_name().unwrap().to_string_lossy()));
        }
        Ok(confirmed)
    }
}
