use std::collections::BTreeMap;

use crate::workload_analysis::domain::WorkloadRecord;

/// How a dataset is meant to be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Chronological trend
    Line,
    /// Share-of-total (pie/doughnut family)
    Proportion,
    /// Grouped totals
    Bar,
    /// Top-N ordered by value
    RankedBar,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// One derived dataset, a pure function of the record slice it was built
/// from. Rebuilt wholesale on every render; no dataset survives a refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    pub title: &'static str,
    pub kind: ChartKind,
    pub points: Vec<ChartPoint>,
}

/// Number of workloads kept in the cost ranking.
const TOP_COST_LIMIT: usize = 10;

/// Derives the eight dashboard datasets from the given records.
///
/// Grouped datasets emit their points in sorted label order so output is
/// deterministic; the cost trend is chronological and the cost ranking is
/// ordered by value descending.
pub fn build_chart_datasets(records: &[WorkloadRecord]) -> Vec<ChartDataset> {
    vec![
        cost_trend(records),
        count_per_cloud(records),
        count_per_category(records),
        top_cost_ranking(records),
        vcpu_per_category(records),
        memory_per_category(records),
        iops_per_cloud(records),
        throughput_per_cloud(records),
    ]
}

fn to_points(groups: BTreeMap<String, f64>) -> Vec<ChartPoint> {
    groups
        .into_iter()
        .map(|(label, value)| ChartPoint { label, value })
        .collect()
}

fn count_by<F>(records: &[WorkloadRecord], key: F) -> BTreeMap<String, f64>
where
    F: Fn(&WorkloadRecord) -> &str,
{
    let mut groups = BTreeMap::new();
    for record in records {
        *groups.entry(key(record).to_string()).or_insert(0.0) += 1.0;
    }
    groups
}

fn sum_by<K, M>(records: &[WorkloadRecord], key: K, metric: M) -> BTreeMap<String, f64>
where
    K: Fn(&WorkloadRecord) -> &str,
    M: Fn(&WorkloadRecord) -> f64,
{
    let mut groups = BTreeMap::new();
    for record in records {
        *groups.entry(key(record).to_string()).or_insert(0.0) += metric(record);
    }
    groups
}

/// 1) Total monthly cost summed per calendar day, chronological.
fn cost_trend(records: &[WorkloadRecord]) -> ChartDataset {
    let per_day = sum_by(records, |r| r.day(), |r| r.monthly_cost());
    ChartDataset {
        title: "Total Monthly Cost (USD) by day",
        kind: ChartKind::Line,
        // BTreeMap iteration is already ascending, which is chronological
        // for ISO-8601 day strings.
        points: to_points(per_day),
    }
}

/// 2) Workload count per cloud.
fn count_per_cloud(records: &[WorkloadRecord]) -> ChartDataset {
    ChartDataset {
        title: "Workloads by cloud",
        kind: ChartKind::Proportion,
        points: to_points(count_by(records, |r| r.cloud_label())),
    }
}

/// 3) Workload count per category.
fn count_per_category(records: &[WorkloadRecord]) -> ChartDataset {
    ChartDataset {
        title: "Workloads by category",
        kind: ChartKind::Proportion,
        points: to_points(count_by(records, |r| r.category_label())),
    }
}

/// 4) Top 10 workloads by monthly cost, descending.
fn top_cost_ranking(records: &[WorkloadRecord]) -> ChartDataset {
    let mut ranked: Vec<&WorkloadRecord> = records.iter().collect();
    ranked.sort_by(|a, b| {
        b.monthly_cost()
            .partial_cmp(&a.monthly_cost())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let points = ranked
        .into_iter()
        .take(TOP_COST_LIMIT)
        .map(|record| ChartPoint {
            label: record.rank_label().to_string(),
            value: record.monthly_cost(),
        })
        .collect();
    ChartDataset {
        title: "Top 10 workloads by monthly cost (USD)",
        kind: ChartKind::RankedBar,
        points,
    }
}

/// 5) Estimated vCPUs summed per category.
fn vcpu_per_category(records: &[WorkloadRecord]) -> ChartDataset {
    ChartDataset {
        title: "Estimated vCPUs by category",
        kind: ChartKind::Bar,
        points: to_points(sum_by(
            records,
            |r| r.category_label(),
            |r| r.estimated_vcpu_count(),
        )),
    }
}

/// 6) Memory (GB) summed per category.
fn memory_per_category(records: &[WorkloadRecord]) -> ChartDataset {
    ChartDataset {
        title: "Memory (GB) by category",
        kind: ChartKind::Bar,
        points: to_points(sum_by(
            records,
            |r| r.category_label(),
            |r| r.memory_gigabytes(),
        )),
    }
}

/// 7) Total IOPS summed per cloud.
fn iops_per_cloud(records: &[WorkloadRecord]) -> ChartDataset {
    ChartDataset {
        title: "Total IOPS by cloud",
        kind: ChartKind::Proportion,
        points: to_points(sum_by(records, |r| r.cloud_label(), |r| r.iops())),
    }
}

/// 8) Throughput (MB/s) summed per cloud.
fn throughput_per_cloud(records: &[WorkloadRecord]) -> ChartDataset {
    ChartDataset {
        title: "Throughput (MB/s) by cloud",
        kind: ChartKind::Proportion,
        points: to_points(sum_by(records, |r| r.cloud_label(), |r| r.throughput())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(
        cloud: &str,
        category: &str,
        day: &str,
        cost: serde_json::Value,
        vcpus: f64,
    ) -> WorkloadRecord {
        WorkloadRecord {
            cloud: Some(cloud.to_string()),
            category: Some(category.to_string()),
            db_name: Some(format!("{}-{}", cloud, category)),
            timestamp: Some(format!("{}T12:00:00", day)),
            monthly_cost_usd: cost,
            estimated_vcpus: json!(vcpus),
            memory_gb: json!(vcpus * 8.0),
            total_iops: json!(1000),
            throughput_mbs: json!(50),
            ..Default::default()
        }
    }

    fn sample() -> Vec<WorkloadRecord> {
        vec![
            record("AWS", "OLTP", "2025-11-02", json!(300.0), 8.0),
            record("AWS", "DW", "2025-11-01", json!("100.5"), 16.0),
            record("Azure", "OLTP", "2025-11-01", json!(200.0), 4.0),
        ]
    }

    #[test]
    fn test_builds_exactly_eight_datasets() {
        let datasets = build_chart_datasets(&sample());
        assert_eq!(datasets.len(), 8);
    }

    #[test]
    fn test_cost_trend_is_chronological_and_summed() {
        let datasets = build_chart_datasets(&sample());
        let trend = &datasets[0];
        assert_eq!(trend.kind, ChartKind::Line);
        let labels: Vec<&str> = trend.points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["2025-11-01", "2025-11-02"]);
        assert_eq!(trend.points[0].value, 300.5);
        assert_eq!(trend.points[1].value, 300.0);
    }

    #[test]
    fn test_counts_per_cloud() {
        let datasets = build_chart_datasets(&sample());
        let by_cloud = &datasets[1];
        assert_eq!(by_cloud.kind, ChartKind::Proportion);
        assert_eq!(
            by_cloud.points,
            vec![
                ChartPoint {
                    label: "AWS".to_string(),
                    value: 2.0
                },
                ChartPoint {
                    label: "Azure".to_string(),
                    value: 1.0
                },
            ]
        );
    }

    #[test]
    fn test_top_cost_ranking_is_descending() {
        let datasets = build_chart_datasets(&sample());
        let ranking = &datasets[3];
        assert_eq!(ranking.kind, ChartKind::RankedBar);
        let values: Vec<f64> = ranking.points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![300.0, 200.0, 100.5]);
    }

    #[test]
    fn test_top_cost_ranking_caps_at_ten() {
        let records: Vec<WorkloadRecord> = (0..15)
            .map(|i| record("AWS", "OLTP", "2025-11-01", json!(i as f64), 1.0))
            .collect();
        let datasets = build_chart_datasets(&records);
        assert_eq!(datasets[3].points.len(), 10);
        assert_eq!(datasets[3].points[0].value, 14.0);
    }

    #[test]
    fn test_vcpu_sums_by_category() {
        let datasets = build_chart_datasets(&sample());
        let vcpus = &datasets[4];
        assert_eq!(vcpus.kind, ChartKind::Bar);
        assert_eq!(
            vcpus.points,
            vec![
                ChartPoint {
                    label: "DW".to_string(),
                    value: 16.0
                },
                ChartPoint {
                    label: "OLTP".to_string(),
                    value: 12.0
                },
            ]
        );
    }

    #[test]
    fn test_unparseable_metrics_count_as_zero() {
        let records = vec![record("AWS", "OLTP", "2025-11-01", json!("n/a"), 2.0)];
        let datasets = build_chart_datasets(&records);
        assert_eq!(datasets[0].points[0].value, 0.0);
        assert_eq!(datasets[3].points[0].value, 0.0);
    }

    #[test]
    fn test_missing_fields_bucket_under_unknown() {
        let records = vec![WorkloadRecord::default()];
        let datasets = build_chart_datasets(&records);
        assert_eq!(datasets[1].points[0].label, "Unknown");
        assert_eq!(datasets[2].points[0].label, "Unknown");
    }

    #[test]
    fn test_empty_input_builds_empty_datasets() {
        let datasets = build_chart_datasets(&[]);
        assert_eq!(datasets.len(), 8);
        assert!(datasets.iter().all(|d| d.points.is_empty()));
    }
}
