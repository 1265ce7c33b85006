use std::path::Path;

use crate::ports::outbound::{AccountGateway, ProfileUpdate, ProgressReporter, SessionStore, UserProfile};
use crate::shared::error::ClientError;
use crate::shared::Result;
use crate::workload_analysis::domain::Session;

/// ProfileUseCase - profile read/update and avatar upload
///
/// The session file is rewritten with the server-confirmed values after
/// every successful change, keeping it the single source of truth.
pub struct ProfileUseCase<AG, SS, PR> {
    account_gateway: AG,
    session_store: SS,
    progress_reporter: PR,
}

impl<AG, SS, PR> ProfileUseCase<AG, SS, PR>
where
    AG: AccountGateway,
    SS: SessionStore,
    PR: ProgressReporter,
{
    pub fn new(account_gateway: AG, session_store: SS, progress_reporter: PR) -> Self {
        Self {
            account_gateway,
            session_store,
            progress_reporter,
        }
    }

    pub async fn show(&self, session: &Session) -> Result<UserProfile> {
        let profile = self.account_gateway.fetch_profile(session).await?;
        if let Some(details) = &profile.error {
            return Err(ClientError::Api {
                details: details.clone(),
            }
            .into());
        }
        Ok(profile)
    }

    /// Applies the requested changes and returns the refreshed session.
    pub async fn update(&self, session: &Session, update: ProfileUpdate) -> Result<Session> {
        if update.new_password.is_some() && update.old_password.is_none() {
            return Err(ClientError::Validation {
                message: "Changing the password requires the current password.".to_string(),
            }
            .into());
        }

        let profile = self.account_gateway.update_profile(session, &update).await?;
        if let Some(details) = profile.error {
            return Err(ClientError::Api { details }.into());
        }

        let refreshed = Session {
            email: profile.email.clone().unwrap_or_else(|| session.email.clone()),
            name: profile.name.clone().or_else(|| session.name.clone()),
            license_key: session.license_key.clone(),
            profile_image_url: profile
                .profile_image_url
                .clone()
                .or_else(|| session.profile_image_url.clone()),
        };
        self.session_store.save(&refreshed)?;
        self.progress_reporter.report_completion("✅ Profile updated");
        Ok(refreshed)
    }

    /// Uploads a new avatar and returns the refreshed session.
    pub async fn upload_avatar(&self, session: &Session, image: &Path) -> Result<Session> {
        let profile = self.account_gateway.upload_avatar(session, image).await?;
        let Some(url) = profile.profile_image_url else {
            return Err(ClientError::Api {
                details: profile
                    .error
                    .unwrap_or_else(|| "Image upload failed".to_string()),
            }
            .into());
        };

        let refreshed = Session {
            profile_image_url: Some(url),
            ..session.clone()
        };
        self.session_store.save(&refreshed)?;
        self.progress_reporter
            .report_completion("✅ Profile image updated");
        Ok(refreshed)
    }
}
