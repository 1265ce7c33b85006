use crate::shared::Result;
use crate::workload_analysis::domain::Session;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// One managed account as listed by the admin endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

/// Requested changes to a managed account.
#[derive(Debug, Clone, Default)]
pub struct UserEdit {
    pub name: Option<String>,
    pub email: Option<String>,
    pub is_admin: Option<bool>,
}

impl UserEdit {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.is_admin.is_none()
    }
}

/// One historical analysis report row.
///
/// Numeric columns share the summary's loose typing and are kept raw.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportEntry {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub cloud: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub vcpus: Value,
    #[serde(default)]
    pub memory: Value,
    #[serde(default)]
    pub iops: Value,
    #[serde(default)]
    pub throughput: Value,
    #[serde(default)]
    pub recommended_vm: Option<String>,
    #[serde(default)]
    pub vm_vcpus: Value,
    #[serde(default)]
    pub vm_memory: Value,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub monthly_cost: Value,
}

/// Filter for the report listing; empty fields mean "all".
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    pub email: Option<String>,
    pub cloud: Option<String>,
}

/// AdminGateway port for user management and report listings
///
/// Authentication rides in an Authorization bearer header derived from the
/// session license key; credentials are never placed in the query string.
#[async_trait]
pub trait AdminGateway {
    async fn list_users(&self, session: &Session) -> Result<Vec<AdminUser>>;

    async fn update_user(&self, session: &Session, id: i64, edit: &UserEdit) -> Result<()>;

    async fn delete_user(&self, session: &Session, id: i64) -> Result<()>;

    async fn list_reports(
        &self,
        session: &Session,
        filter: &ReportFilter,
    ) -> Result<Vec<ReportEntry>>;
}
