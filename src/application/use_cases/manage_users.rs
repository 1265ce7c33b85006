use crate::ports::outbound::{AdminGateway, AdminUser, ProgressReporter, ReportEntry, ReportFilter, UserEdit};
use crate::shared::error::ClientError;
use crate::shared::Result;
use crate::workload_analysis::domain::Session;

/// AdminUseCase - user management and report listings
///
/// Every call authenticates with the session's license key as a bearer
/// token; credentials never travel as query or form parameters.
pub struct AdminUseCase<AG, PR> {
    admin_gateway: AG,
    progress_reporter: PR,
}

impl<AG, PR> AdminUseCase<AG, PR>
where
    AG: AdminGateway,
    PR: ProgressReporter,
{
    pub fn new(admin_gateway: AG, progress_reporter: PR) -> Self {
        Self {
            admin_gateway,
            progress_reporter,
        }
    }

    pub async fn list_users(&self, session: &Session) -> Result<Vec<AdminUser>> {
        let users = self.admin_gateway.list_users(session).await?;
        self.progress_reporter
            .report(&format!("✅ Loaded {} user(s)", users.len()));
        Ok(users)
    }

    pub async fn edit_user(&self, session: &Session, id: i64, edit: UserEdit) -> Result<()> {
        if edit.is_empty() {
            return Err(ClientError::Validation {
                message: "Nothing to change: provide a name, email, or admin flag.".to_string(),
            }
            .into());
        }
        self.admin_gateway.update_user(session, id, &edit).await?;
        self.progress_reporter
            .report_completion(&format!("✅ User {} updated", id));
        Ok(())
    }

    pub async fn set_admin(&self, session: &Session, id: i64, is_admin: bool) -> Result<()> {
        let edit = UserEdit {
            is_admin: Some(is_admin),
            ..Default::default()
        };
        self.admin_gateway.update_user(session, id, &edit).await?;
        let verb = if is_admin { "granted to" } else { "revoked from" };
        self.progress_reporter
            .report_completion(&format!("✅ Admin role {} user {}", verb, id));
        Ok(())
    }

    pub async fn delete_user(&self, session: &Session, id: i64) -> Result<()> {
        self.admin_gateway.delete_user(session, id).await?;
        self.progress_reporter
            .report_completion(&format!("✅ User {} deleted", id));
        Ok(())
    }

    pub async fn list_reports(
        &self,
        session: &Session,
        filter: ReportFilter,
    ) -> Result<Vec<ReportEntry>> {
        let reports = self.admin_gateway.list_reports(session, &filter).await?;
        self.progress_reporter
            .report(&format!("✅ Loaded {} report record(s)", reports.len()));
        Ok(reports)
    }
}
