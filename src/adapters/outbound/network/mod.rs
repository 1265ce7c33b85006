pub mod account_api;
pub mod admin_api;
pub mod analysis_api;
pub mod results_api;

pub use account_api::HttpAccountGateway;
pub use admin_api::HttpAdminGateway;
pub use analysis_api::HttpAnalysisGateway;
pub use results_api::HttpResultsGateway;

use crate::shared::Result;
use std::time::Duration;

/// Client-level timeout applied to every request so a hung call cannot
/// stall a step indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Builds the shared reqwest client configuration used by all gateways.
pub(crate) fn build_http_client() -> Result<reqwest::Client> {
    let version = env!("CARGO_PKG_VERSION");
    let user_agent = format!("sizewise/{}", version);
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// Normalizes a base URL so endpoint paths can be appended directly.
pub(crate) fn trim_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}
