use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::OutputFormat;
use crate::workload_analysis::domain::CloudTarget;

/// Terminal client for the SizeWise workload sizing and cost-analysis service
#[derive(Parser, Debug)]
#[command(name = "sizewise")]
#[command(version)]
#[command(about = "Submit database workloads for sizing analysis and browse the results", long_about = None)]
pub struct Args {
    /// Service base URL (overrides the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Path to a config file (defaults to ./sizewise.config.yml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record the login identity used by all other commands
    Login {
        /// Account email
        #[arg(long)]
        email: String,
        /// Account license key
        #[arg(long)]
        license_key: String,
        /// Display name
        #[arg(long)]
        name: Option<String>,
    },

    /// Forget the recorded login identity
    Logout,

    /// Upload reports and/or manual metrics and run an analysis to completion
    Submit {
        /// Target cloud platform: aws, azure, gcp or oracle
        #[arg(long)]
        cloud: Option<CloudTarget>,

        /// Performance report file; repeat for multiple files
        #[arg(short, long = "file", value_name = "PATH")]
        files: Vec<PathBuf>,

        /// Manually entered vCPU count
        #[arg(long, value_name = "N")]
        vcpu: Option<String>,

        /// Manually entered memory (GB)
        #[arg(long, value_name = "GB")]
        memory: Option<String>,

        /// Manually entered IOPS
        #[arg(long, value_name = "N")]
        iops: Option<String>,

        /// Manually entered throughput (MB/s)
        #[arg(long, value_name = "MBS")]
        throughput: Option<String>,

        /// Stay on the progress view; do not open the dashboard afterwards
        #[arg(long)]
        no_dashboard: bool,
    },

    /// Browse, filter, and export the analysis results
    Dashboard {
        /// Keep only records for this cloud (case-insensitive)
        #[arg(long)]
        cloud: Option<String>,

        /// Keep only records from this source report (case-insensitive)
        #[arg(long)]
        source: Option<String>,

        /// Keep only records whose timestamp starts with this date (e.g. 2025-11-03)
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<String>,

        /// Table page to show
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Output format: table, csv or markdown
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,

        /// Write the output to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Skip the chart summaries
        #[arg(long)]
        no_charts: bool,
    },

    /// Show or change the account profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Manage users and report history (admin accounts only)
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProfileAction {
    /// Show the profile for the logged-in account
    Show,

    /// Update name, email, or password
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Current password; required when changing the password
        #[arg(long)]
        old_password: Option<String>,
        #[arg(long)]
        new_password: Option<String>,
    },

    /// Upload a new avatar image
    Avatar {
        /// Image file to upload
        image: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum AdminAction {
    /// List all user accounts
    Users,

    /// Change a user's name and/or email
    UpdateUser {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },

    /// Grant the admin role to a user
    GrantAdmin { id: i64 },

    /// Revoke the admin role from a user
    RevokeAdmin { id: i64 },

    /// Delete a user account
    DeleteUser {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// List historical analysis reports
    Reports {
        /// Keep only reports submitted by this email
        #[arg(long)]
        email: Option<String>,
        /// Keep only reports for this cloud
        #[arg(long)]
        cloud: Option<String>,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
