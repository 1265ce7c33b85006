use crate::ports::outbound::{AdminGateway, AdminUser, ReportEntry, ReportFilter, UserEdit};
use crate::shared::error::ClientError;
use crate::shared::Result;
use crate::workload_analysis::domain::Session;
use async_trait::async_trait;
use reqwest::multipart::Form;
use serde::Deserialize;

use super::{build_http_client, trim_base_url};

#[derive(Debug, Deserialize)]
struct UsersResponse {
    #[serde(default)]
    users: Vec<AdminUser>,
    #[serde(default)]
    detail: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReportsResponse {
    #[serde(default)]
    reports: Vec<ReportEntry>,
}

/// HttpAdminGateway adapter for the admin endpoints
///
/// Authenticates with `Authorization: Bearer <license-key>` from the
/// session. Credentials are deliberately kept out of the query string and
/// form body.
pub struct HttpAdminGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAdminGateway {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: build_http_client()?,
            base_url: trim_base_url(base_url),
        })
    }

    async fn error_detail(response: reqwest::Response) -> ClientError {
        let status = response.status();
        let detail = response
            .json::<UsersResponse>()
            .await
            .ok()
            .and_then(|body| body.detail)
            .unwrap_or_else(|| format!("status code {}", status));
        ClientError::Api { details: detail }
    }
}

#[async_trait]
impl AdminGateway for HttpAdminGateway {
    async fn list_users(&self, session: &Session) -> Result<Vec<AdminUser>> {
        let url = format!("{}/api/admin/users", self.base_url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&session.license_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_detail(response).await.into());
        }

        let body: UsersResponse = response.json().await?;
        Ok(body.users)
    }

    async fn update_user(&self, session: &Session, id: i64, edit: &UserEdit) -> Result<()> {
        let mut form = Form::new();
        if let Some(name) = &edit.name {
            form = form.text("name", name.clone());
        }
        if let Some(email) = &edit.email {
            form = form.text("email", email.clone());
        }
        if let Some(is_admin) = edit.is_admin {
            form = form.text("is_admin", if is_admin { "1" } else { "0" });
        }

        let url = format!("{}/api/admin/users/{}", self.base_url, id);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&session.license_key)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_detail(response).await.into());
        }
        Ok(())
    }

    async fn delete_user(&self, session: &Session, id: i64) -> Result<()> {
        let url = format!("{}/api/admin/users/{}", self.base_url, id);
        let response = self
            .client
            .delete(&url)
            .bearer_auth(&session.license_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_detail(response).await.into());
        }
        Ok(())
    }

    async fn list_reports(
        &self,
        session: &Session,
        filter: &ReportFilter,
    ) -> Result<Vec<ReportEntry>> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(email) = &filter.email {
            params.push(("email", email.clone()));
        }
        if let Some(cloud) = &filter.cloud {
            params.push(("cloud", cloud.clone()));
        }

        let url = format!("{}/api/reports", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&params)
            .bearer_auth(&session.license_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("reports endpoint returned status code {}", status);
        }

        let body: ReportsResponse = response.json().await?;
        Ok(body.reports)
    }
}
