/// Cloud platform an analysis is priced against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudTarget {
    Aws,
    Azure,
    Gcp,
    Oracle,
}

impl std::str::FromStr for CloudTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "aws" => Ok(CloudTarget::Aws),
            "azure" => Ok(CloudTarget::Azure),
            "gcp" | "google" => Ok(CloudTarget::Gcp),
            "oracle" | "oci" => Ok(CloudTarget::Oracle),
            _ => Err(format!(
                "Invalid cloud target: {}. Please specify 'aws', 'azure', 'gcp' or 'oracle'",
                s
            )),
        }
    }
}

impl CloudTarget {
    /// Canonical name used on the wire and in the dashboard.
    pub fn as_str(&self) -> &'static str {
        match self {
            CloudTarget::Aws => "AWS",
            CloudTarget::Azure => "Azure",
            CloudTarget::Gcp => "GCP",
            CloudTarget::Oracle => "Oracle",
        }
    }
}

impl std::fmt::Display for CloudTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
