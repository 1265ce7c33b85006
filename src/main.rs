use std::path::{Path, PathBuf};
use std::process;

use sizewise::adapters::outbound::console::StderrProgressReporter;
use sizewise::adapters::outbound::filesystem::{FileSessionStore, FileSystemWriter, StdoutPresenter};
use sizewise::adapters::outbound::network::{
    HttpAccountGateway, HttpAdminGateway, HttpAnalysisGateway, HttpResultsGateway,
};
use sizewise::application::dto::{DashboardQuery, OutputFormat, SubmissionRequest};
use sizewise::application::factories::FormatterFactory;
use sizewise::application::use_cases::{
    AdminUseCase, LoadDashboardUseCase, ProfileUseCase, SubmissionOutcome, SubmitAnalysisUseCase,
    RESULTS_REDIRECT_DELAY,
};
use sizewise::cli::{AdminAction, Args, Command, ProfileAction};
use sizewise::config::{self, Settings};
use sizewise::ports::outbound::{
    DashboardFormatter, OutputPresenter, ProfileUpdate, ReportFilter, SessionStore, UserEdit,
};
use sizewise::shared::error::{ClientError, ExitCode};
use sizewise::shared::{CancellationFlag, Result};
use sizewise::workload_analysis::domain::{cell_text, ManualMetrics, Session};
use sizewise::workload_analysis::services::FilterCriteria;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        let code = e
            .downcast_ref::<ClientError>()
            .map(ClientError::exit_code)
            .unwrap_or(ExitCode::ApplicationError);
        process::exit(code.as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    let config_file = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(Path::new("."))?,
    };
    let settings = Settings::resolve(config_file, args.api_url.clone());

    let session_path = settings
        .session_file
        .clone()
        .unwrap_or_else(FileSessionStore::default_path);
    let session_store = FileSessionStore::new(session_path);

    match args.command {
        Command::Login {
            email,
            license_key,
            name,
        } => {
            let session = Session::new(email, license_key, name);
            session_store.save(&session)?;
            eprintln!("✅ Logged in as {}", session.email);
            Ok(())
        }

        Command::Logout => {
            session_store.clear()?;
            eprintln!("✅ Logged out");
            Ok(())
        }

        Command::Submit {
            cloud,
            files,
            vcpu,
            memory,
            iops,
            throughput,
            no_dashboard,
        } => {
            let session = require_session(&session_store)?;
            let manual = manual_metrics(vcpu, memory, iops, throughput);
            let request =
                SubmissionRequest::new(cloud, files, manual, Some(session.email.clone()));
            run_submit(&settings, request, no_dashboard).await
        }

        Command::Dashboard {
            cloud,
            source,
            date,
            page,
            format,
            output,
            no_charts,
        } => {
            require_session(&session_store)?;
            let criteria = FilterCriteria::new(cloud, source, date);
            run_dashboard(&settings, criteria, page, format, output, !no_charts).await
        }

        Command::Profile { action } => {
            let session = require_session(&session_store)?;
            run_profile(&settings, session_store, session, action).await
        }

        Command::Admin { action } => {
            let session = require_session(&session_store)?;
            run_admin(&settings, session, action).await
        }
    }
}

fn require_session(store: &FileSessionStore) -> Result<Session> {
    store
        .load()?
        .ok_or_else(|| anyhow::Error::new(ClientError::NotLoggedIn))
}

/// Collapses the four metric flags into one optional manual-entry block.
fn manual_metrics(
    vcpu: Option<String>,
    memory: Option<String>,
    iops: Option<String>,
    throughput: Option<String>,
) -> Option<ManualMetrics> {
    if vcpu.is_none() && memory.is_none() && iops.is_none() && throughput.is_none() {
        return None;
    }
    Some(ManualMetrics {
        vcpu: vcpu.unwrap_or_default(),
        memory: memory.unwrap_or_default(),
        iops: iops.unwrap_or_default(),
        throughput: throughput.unwrap_or_default(),
    })
}

async fn run_submit(
    settings: &Settings,
    request: SubmissionRequest,
    no_dashboard: bool,
) -> Result<()> {
    let gateway = HttpAnalysisGateway::new(&settings.api_base_url)?;
    let progress_reporter = StderrProgressReporter::new();

    let cancel = CancellationFlag::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
    }

    let use_case = SubmitAnalysisUseCase::new(
        gateway,
        progress_reporter,
        settings.poll_policy.clone(),
        cancel,
    );
    let outcome = use_case.execute(request).await?;

    if matches!(outcome, SubmissionOutcome::Completed { .. }) && !no_dashboard {
        tokio::time::sleep(RESULTS_REDIRECT_DELAY).await;
        run_dashboard(
            settings,
            FilterCriteria::default(),
            1,
            OutputFormat::Table,
            None,
            true,
        )
        .await?;
    }

    Ok(())
}

async fn run_dashboard(
    settings: &Settings,
    criteria: FilterCriteria,
    page: usize,
    format: OutputFormat,
    output: Option<PathBuf>,
    include_charts: bool,
) -> Result<()> {
    let gateway = HttpResultsGateway::new(&settings.api_base_url)?;
    let progress_reporter = StderrProgressReporter::new();
    let use_case = LoadDashboardUseCase::new(gateway, progress_reporter);

    let query =
        DashboardQuery::new(criteria, page, include_charts).with_page_size(settings.page_size);
    let view = use_case.execute(query).await?;

    // An empty filtered view exports nothing; alert and skip the file.
    if format == OutputFormat::Csv && view.is_empty() {
        eprintln!("⚠️  No data to export.");
        return Ok(());
    }

    eprintln!("{}", FormatterFactory::progress_message(format));
    let formatter = FormatterFactory::create(format);
    let content = formatter.format(&view)?;

    let presenter: Box<dyn OutputPresenter> = match output {
        Some(path) => Box::new(FileSystemWriter::new(path)),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(&content)
}

async fn run_profile(
    settings: &Settings,
    session_store: FileSessionStore,
    session: Session,
    action: ProfileAction,
) -> Result<()> {
    let gateway = HttpAccountGateway::new(&settings.api_base_url)?;
    let progress_reporter = StderrProgressReporter::new();
    let use_case = ProfileUseCase::new(gateway, session_store, progress_reporter);

    match action {
        ProfileAction::Show => {
            let profile = use_case.show(&session).await?;
            println!(
                "Name:   {}",
                profile.name.as_deref().unwrap_or("-")
            );
            println!(
                "Email:  {}",
                profile.email.as_deref().unwrap_or(&session.email)
            );
            match profile.profile_image_url.as_deref() {
                Some(url) => println!("Avatar: {}", url),
                None => println!("Avatar: (initial '{}')", session.avatar_initial()),
            }
            Ok(())
        }

        ProfileAction::Update {
            name,
            email,
            old_password,
            new_password,
        } => {
            let update = ProfileUpdate {
                new_name: name,
                new_email: email,
                old_password,
                new_password,
            };
            use_case.update(&session, update).await?;
            Ok(())
        }

        ProfileAction::Avatar { image } => {
            let refreshed = use_case.upload_avatar(&session, &image).await?;
            if let Some(url) = refreshed.profile_image_url.as_deref() {
                println!("Avatar: {}", url);
            }
            Ok(())
        }
    }
}

async fn run_admin(settings: &Settings, session: Session, action: AdminAction) -> Result<()> {
    let gateway = HttpAdminGateway::new(&settings.api_base_url)?;
    let progress_reporter = StderrProgressReporter::new();
    let use_case = AdminUseCase::new(gateway, progress_reporter);

    match action {
        AdminAction::Users => {
            let users = use_case.list_users(&session).await?;
            println!("{:>5}  {:<24} {:<32} {}", "ID", "Name", "Email", "Role");
            for user in users {
                println!(
                    "{:>5}  {:<24} {:<32} {}",
                    user.id,
                    user.name.as_deref().unwrap_or("-"),
                    user.email.as_deref().unwrap_or("-"),
                    if user.is_admin { "Admin" } else { "User" }
                );
            }
            Ok(())
        }

        AdminAction::UpdateUser { id, name, email } => {
            let edit = UserEdit {
                name,
                email,
                is_admin: None,
            };
            use_case.edit_user(&session, id, edit).await
        }

        AdminAction::GrantAdmin { id } => use_case.set_admin(&session, id, true).await,

        AdminAction::RevokeAdmin { id } => use_case.set_admin(&session, id, false).await,

        AdminAction::DeleteUser { id, yes } => {
            if !yes && !confirm(&format!("Delete user {}?", id))? {
                eprintln!("Aborted.");
                return Ok(());
            }
            use_case.delete_user(&session, id).await
        }

        AdminAction::Reports { email, cloud } => {
            let filter = ReportFilter { email, cloud };
            let reports = use_case.list_reports(&session, filter).await?;
            if reports.is_empty() {
                println!("No report records found");
                return Ok(());
            }
            println!(
                "{:<20} {:<28} {:<8} {:<24} {:>6} {:>8} {:>8} {:>10} {:<16} {:<16} {:>12}",
                "Timestamp", "User", "Cloud", "Source", "vCPUs", "Mem(GB)", "IOPS", "MB/s",
                "VM", "Category", "Cost(USD)"
            );
            for report in reports {
                println!(
                    "{:<20} {:<28} {:<8} {:<24} {:>6} {:>8} {:>8} {:>10} {:<16} {:<16} {:>12}",
                    report.timestamp.as_deref().unwrap_or("-"),
                    report.user_email.as_deref().unwrap_or("-"),
                    report.cloud.as_deref().unwrap_or("-"),
                    report.source.as_deref().unwrap_or("-"),
                    cell_text(&report.vcpus),
                    cell_text(&report.memory),
                    cell_text(&report.iops),
                    cell_text(&report.throughput),
                    report.recommended_vm.as_deref().unwrap_or("-"),
                    report.category.as_deref().unwrap_or("-"),
                    cell_text(&report.monthly_cost),
                );
            }
            Ok(())
        }
    }
}

/// Interactive yes/no confirmation on stderr + stdin.
fn confirm(prompt: &str) -> Result<bool> {
    use std::io::{self, BufRead, Write};

    eprint!("{} [y/N] ", prompt);
    io::stderr().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "YES"))
}
