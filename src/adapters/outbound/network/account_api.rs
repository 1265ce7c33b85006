use std::path::Path;

use crate::ports::outbound::{AccountGateway, ProfileUpdate, UserProfile};
use crate::shared::error::ClientError;
use crate::shared::Result;
use crate::workload_analysis::domain::Session;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use super::{build_http_client, trim_base_url};

/// HttpAccountGateway adapter for the profile endpoints
///
/// The profile API authenticates each call with the account email and
/// license key as form/query fields, matching the service contract.
pub struct HttpAccountGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAccountGateway {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: build_http_client()?,
            base_url: trim_base_url(base_url),
        })
    }

    fn identity_form(session: &Session) -> Form {
        Form::new()
            .text("email", session.email.clone())
            .text("license_key", session.license_key.clone())
    }
}

#[async_trait]
impl AccountGateway for HttpAccountGateway {
    async fn fetch_profile(&self, session: &Session) -> Result<UserProfile> {
        let url = format!(
            "{}/api/profile?email={}&license_key={}",
            self.base_url,
            urlencoding::encode(&session.email),
            urlencoding::encode(&session.license_key)
        );
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("profile endpoint returned status code {}", status);
        }

        let profile: UserProfile = response.json().await?;
        Ok(profile)
    }

    async fn update_profile(
        &self,
        session: &Session,
        update: &ProfileUpdate,
    ) -> Result<UserProfile> {
        let mut form = Self::identity_form(session);
        if let Some(name) = &update.new_name {
            form = form.text("new_name", name.clone());
        }
        if let Some(email) = &update.new_email {
            form = form.text("new_email", email.clone());
        }
        if let Some(new_password) = &update.new_password {
            // The old password travels only alongside a password change.
            if let Some(old_password) = &update.old_password {
                form = form.text("old_password", old_password.clone());
            }
            form = form.text("new_password", new_password.clone());
        }

        let url = format!("{}/api/profile", self.base_url);
        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("profile endpoint returned status code {}", status);
        }

        let profile: UserProfile = response.json().await?;
        Ok(profile)
    }

    async fn upload_avatar(&self, session: &Session, image: &Path) -> Result<UserProfile> {
        let bytes = tokio::fs::read(image)
            .await
            .map_err(|e| ClientError::FileReadError {
                path: image.to_path_buf(),
                details: e.to_string(),
            })?;
        let file_name = image
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "avatar".to_string());

        let form = Self::identity_form(session).part("file", Part::bytes(bytes).file_name(file_name));

        let url = format!("{}/api/profile/image", self.base_url);
        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("profile image endpoint returned status code {}", status);
        }

        let profile: UserProfile = response.json().await?;
        Ok(profile)
    }
}
