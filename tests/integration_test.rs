/// Integration tests for the application layer
mod test_utilities;

use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::time::Duration;

use serde_json::json;
use sizewise::prelude::*;
use test_utilities::mocks::*;

fn record(cloud: &str, source: &str, day: &str, cost: f64) -> WorkloadRecord {
    WorkloadRecord {
        cloud: Some(cloud.to_string()),
        source: Some(source.to_string()),
        db_name: Some(format!("{}-{}", cloud, source)),
        category: Some("OLTP".to_string()),
        timestamp: Some(format!("{}T10:00:00", day)),
        monthly_cost_usd: json!(cost),
        estimated_vcpus: json!(8),
        memory_gb: json!(64),
        total_iops: json!(4000),
        throughput_mbs: json!(150),
        ..Default::default()
    }
}

/// 12 AWS + 13 Azure records.
fn mixed_fleet() -> Vec<WorkloadRecord> {
    let mut records: Vec<WorkloadRecord> = (0..12)
        .map(|i| record("AWS", &format!("awr_{:02}.html", i), "2025-11-01", 100.0 + i as f64))
        .collect();
    records.extend(
        (0..13).map(|i| record("Azure", &format!("sp_{:02}.lst", i), "2025-11-02", 50.0)),
    );
    records
}

#[tokio::test]
async fn test_dashboard_filter_and_pagination() {
    let gateway = MockResultsGateway::new(mixed_fleet());
    let reporter = MockProgressReporter::new();
    let use_case = LoadDashboardUseCase::new(gateway, reporter);

    let criteria = FilterCriteria::new(Some("AWS".to_string()), None, None);
    let view = use_case
        .execute(DashboardQuery::new(criteria.clone(), 1, false))
        .await
        .unwrap();

    assert_eq!(view.total_count, 25);
    assert_eq!(view.filtered_count, 12);
    assert_eq!(view.page_rows.len(), 10);
    assert_eq!(view.total_pages, 2);
    assert!(view.has_next);
    assert!(!view.has_prev);

    // Page 2 shows the remaining 2 rows and no further page.
    let gateway = MockResultsGateway::new(mixed_fleet());
    let use_case = LoadDashboardUseCase::new(gateway, MockProgressReporter::new());
    let view = use_case
        .execute(DashboardQuery::new(criteria, 2, false))
        .await
        .unwrap();
    assert_eq!(view.page_rows.len(), 2);
    assert!(!view.has_next);
    assert!(view.has_prev);
}

#[tokio::test]
async fn test_dashboard_filtered_rows_all_match_predicate() {
    let gateway = MockResultsGateway::new(mixed_fleet());
    let use_case = LoadDashboardUseCase::new(gateway, MockProgressReporter::new());

    let criteria = FilterCriteria::new(Some("aws".to_string()), None, Some("2025-11-01".to_string()));
    let view = use_case
        .execute(DashboardQuery::new(criteria, 1, false))
        .await
        .unwrap();

    assert_eq!(view.filtered_count, 12);
    for row in &view.export_rows {
        assert_eq!(row.cloud, "AWS");
    }
}

#[tokio::test]
async fn test_dashboard_fetch_failure_yields_unavailable_view() {
    let gateway = MockResultsGateway::with_failure();
    let reporter = MockProgressReporter::new();
    let use_case = LoadDashboardUseCase::new(gateway, reporter.clone());

    let view = use_case.execute(DashboardQuery::default()).await.unwrap();

    assert!(view.unavailable.is_some());
    assert!(view.is_empty());
    let messages = reporter.get_messages();
    assert!(messages
        .iter()
        .any(|m| m.contains("Error:") && m.contains("Failed to load summary")));
}

#[tokio::test]
async fn test_dashboard_builds_eight_charts() {
    let gateway = MockResultsGateway::new(mixed_fleet());
    let use_case = LoadDashboardUseCase::new(gateway, MockProgressReporter::new());

    let view = use_case.execute(DashboardQuery::default()).await.unwrap();
    assert_eq!(view.charts.len(), 8);

    // Cost trend sums per day, chronologically.
    let trend = &view.charts[0];
    assert_eq!(trend.kind, ChartKind::Line);
    assert_eq!(trend.points.len(), 2);
    assert_eq!(trend.points[0].label, "2025-11-01");
    assert_eq!(trend.points[1].label, "2025-11-02");
    assert_eq!(trend.points[1].value, 13.0 * 50.0);
}

#[tokio::test]
async fn test_csv_export_of_filtered_view_round_trips() {
    let gateway = MockResultsGateway::new(mixed_fleet());
    let use_case = LoadDashboardUseCase::new(gateway, MockProgressReporter::new());

    let criteria = FilterCriteria::new(Some("Azure".to_string()), None, None);
    let view = use_case
        .execute(DashboardQuery::new(criteria, 1, false))
        .await
        .unwrap();

    let csv_text = CsvFormatter::new().format(&view).unwrap();
    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

    assert_eq!(rows.len(), 13);
    assert!(rows.iter().all(|r| r.len() == 12));
    assert!(rows.iter().all(|r| &r[2] == "Azure"));
}

#[tokio::test]
async fn test_submission_scenario_three_polls_then_complete() {
    let gateway = MockAnalysisGateway::new(vec![
        (30.0, "Parsing reports"),
        (70.0, "Recommending VMs"),
        (100.0, "Done"),
    ]);
    let upload_calls = gateway.upload_calls.clone();
    let start_calls = gateway.start_calls.clone();
    let poll_calls = gateway.poll_calls.clone();
    let reporter = MockProgressReporter::new();

    let policy = PollPolicy {
        interval: Duration::from_millis(0),
        max_attempts: Some(10),
    };
    let use_case =
        SubmitAnalysisUseCase::new(gateway, reporter.clone(), policy, CancellationFlag::new());

    let request = SubmissionRequest::new(
        Some(CloudTarget::Aws),
        vec![PathBuf::from("awr_prod.html")],
        None,
        Some("dba@example.com".to_string()),
    );
    let outcome = use_case.execute(request).await.unwrap();

    assert_eq!(outcome, SubmissionOutcome::Completed { polls: 3 });
    assert_eq!(upload_calls.load(Ordering::Relaxed), 1);
    assert_eq!(start_calls.load(Ordering::Relaxed), 1);
    assert_eq!(poll_calls.load(Ordering::Relaxed), 3);

    let messages = reporter.get_messages();
    assert!(messages.iter().any(|m| m.contains("Progress: 30/100")));
    assert!(messages.iter().any(|m| m.contains("(100%)")));
    assert!(messages
        .iter()
        .any(|m| m.starts_with("Completed:") && m.contains("Analysis complete")));
}

#[tokio::test]
async fn test_submission_without_cloud_makes_no_network_call() {
    let gateway = MockAnalysisGateway::new(vec![]);
    let upload_calls = gateway.upload_calls.clone();
    let poll_calls = gateway.poll_calls.clone();

    let use_case = SubmitAnalysisUseCase::new(
        gateway,
        MockProgressReporter::new(),
        PollPolicy::default(),
        CancellationFlag::new(),
    );

    let request = SubmissionRequest::new(None, vec![PathBuf::from("awr.html")], None, None);
    let err = use_case.execute(request).await.unwrap_err();

    assert!(format!("{}", err).contains("Please select a cloud platform"));
    assert_eq!(upload_calls.load(Ordering::Relaxed), 0);
    assert_eq!(poll_calls.load(Ordering::Relaxed), 0);
}

#[tokio::test]
async fn test_profile_update_rewrites_session() {
    let gateway = MockAccountGateway::new("Dana", "dba@example.com");
    let store = MockSessionStore::new(None);
    let use_case = ProfileUseCase::new(gateway, store.clone(), MockProgressReporter::new());

    let session = Session::new(
        "dba@example.com".to_string(),
        "LK-1234".to_string(),
        Some("Dana".to_string()),
    );
    let update = ProfileUpdate {
        new_name: Some("Dana R".to_string()),
        new_email: Some("dana@example.com".to_string()),
        ..Default::default()
    };

    let refreshed = use_case.update(&session, update).await.unwrap();
    assert_eq!(refreshed.name.as_deref(), Some("Dana R"));
    assert_eq!(refreshed.email, "dana@example.com");
    assert_eq!(refreshed.license_key, "LK-1234");

    // The store now holds the server-confirmed identity.
    let stored = store.current().unwrap();
    assert_eq!(stored.email, "dana@example.com");
}

#[tokio::test]
async fn test_profile_error_payload_surfaces_as_api_error() {
    let gateway = MockAccountGateway::with_error("wrong password");
    let store = MockSessionStore::new(None);
    let use_case = ProfileUseCase::new(gateway, store.clone(), MockProgressReporter::new());

    let session = Session::new("a@b.c".to_string(), "k".to_string(), None);
    let update = ProfileUpdate {
        new_name: Some("X".to_string()),
        ..Default::default()
    };
    let err = use_case.update(&session, update).await.unwrap_err();

    assert!(format!("{}", err).contains("wrong password"));
    // A rejected update never touches the session file.
    assert!(store.current().is_none());
}

#[tokio::test]
async fn test_avatar_upload_updates_session_url() {
    let gateway = MockAccountGateway::new("Dana", "dba@example.com");
    let store = MockSessionStore::new(None);
    let use_case = ProfileUseCase::new(gateway, store.clone(), MockProgressReporter::new());

    let session = Session::new("dba@example.com".to_string(), "LK-1234".to_string(), None);
    let refreshed = use_case
        .upload_avatar(&session, std::path::Path::new("dana.png"))
        .await
        .unwrap();

    assert_eq!(refreshed.profile_image_url.as_deref(), Some("/uploads/dana.png"));
    assert_eq!(
        store.current().unwrap().profile_image_url.as_deref(),
        Some("/uploads/dana.png")
    );
}
