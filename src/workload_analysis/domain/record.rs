use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::numeric::safe_numeric;

/// One analyzed workload row from the service's `summary.json`.
///
/// Field names mirror the column-style keys the service emits. Numeric
/// columns are kept as raw JSON values because the worker writes them
/// inconsistently (numbers, numeric strings, or "-" placeholders); they are
/// coerced through `safe_numeric` wherever arithmetic is needed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkloadRecord {
    #[serde(rename = "Source", default)]
    pub source: Option<String>,
    #[serde(rename = "DB Name", default)]
    pub db_name: Option<String>,
    #[serde(rename = "Cloud", default)]
    pub cloud: Option<String>,
    #[serde(rename = "Estimated vCPUs", default)]
    pub estimated_vcpus: Value,
    #[serde(rename = "Memory (GB)", default)]
    pub memory_gb: Value,
    #[serde(rename = "Total IOPS", default)]
    pub total_iops: Value,
    #[serde(rename = "Throughput (MB/s)", default)]
    pub throughput_mbs: Value,
    #[serde(rename = "Recommended VM", default)]
    pub recommended_vm: Option<String>,
    #[serde(rename = "VM vCPUs", default)]
    pub vm_vcpus: Value,
    #[serde(rename = "VM Memory (GB)", default)]
    pub vm_memory_gb: Value,
    #[serde(rename = "Category", default)]
    pub category: Option<String>,
    #[serde(rename = "Monthly Cost (USD)", default)]
    pub monthly_cost_usd: Value,
    #[serde(rename = "Timestamp", default)]
    pub timestamp: Option<String>,
}

impl WorkloadRecord {
    pub fn monthly_cost(&self) -> f64 {
        safe_numeric(&self.monthly_cost_usd)
    }

    pub fn estimated_vcpu_count(&self) -> f64 {
        safe_numeric(&self.estimated_vcpus)
    }

    pub fn memory_gigabytes(&self) -> f64 {
        safe_numeric(&self.memory_gb)
    }

    pub fn iops(&self) -> f64 {
        safe_numeric(&self.total_iops)
    }

    pub fn throughput(&self) -> f64 {
        safe_numeric(&self.throughput_mbs)
    }

    /// Cloud label for grouping; absent values bucket under "Unknown".
    pub fn cloud_label(&self) -> &str {
        self.cloud.as_deref().unwrap_or("Unknown")
    }

    /// Category label for grouping; absent values bucket under "Unknown".
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or("Unknown")
    }

    /// Calendar day of the timestamp (the part before `T`), or "Unknown".
    pub fn day(&self) -> &str {
        match self.timestamp.as_deref() {
            Some(ts) if !ts.is_empty() => ts.split('T').next().unwrap_or("Unknown"),
            _ => "Unknown",
        }
    }

    /// Label used when ranking workloads: DB name, falling back to source.
    pub fn rank_label(&self) -> &str {
        self.db_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.source.as_deref())
            .unwrap_or("N/A")
    }
}

/// Renders a raw JSON cell the way the dashboard table shows it:
/// strings verbatim, numbers via their JSON representation, anything
/// else as the "-" placeholder.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) if !s.is_empty() => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_json() -> &'static str {
        r#"{
            "Source": "awr_prod_01.html",
            "DB Name": "ORCL1",
            "Cloud": "AWS",
            "Estimated vCPUs": 16,
            "Memory (GB)": "128",
            "Total IOPS": 9500,
            "Throughput (MB/s)": 220.5,
            "Recommended VM": "m5.4xlarge",
            "VM vCPUs": 16,
            "VM Memory (GB)": 64,
            "Category": "General Purpose",
            "Monthly Cost (USD)": "1234.56",
            "Timestamp": "2025-11-03T14:22:09"
        }"#
    }

    #[test]
    fn test_deserializes_column_style_keys() {
        let record: WorkloadRecord = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(record.db_name.as_deref(), Some("ORCL1"));
        assert_eq!(record.cloud_label(), "AWS");
        assert_eq!(record.estimated_vcpu_count(), 16.0);
        assert_eq!(record.memory_gigabytes(), 128.0);
        assert_eq!(record.monthly_cost(), 1234.56);
    }

    #[test]
    fn test_missing_fields_default() {
        let record: WorkloadRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.cloud_label(), "Unknown");
        assert_eq!(record.category_label(), "Unknown");
        assert_eq!(record.day(), "Unknown");
        assert_eq!(record.monthly_cost(), 0.0);
        assert_eq!(record.rank_label(), "N/A");
    }

    #[test]
    fn test_day_extraction() {
        let record: WorkloadRecord = serde_json::from_str(
            r#"{"Timestamp": "2025-11-03T14:22:09"}"#,
        )
        .unwrap();
        assert_eq!(record.day(), "2025-11-03");
    }

    #[test]
    fn test_rank_label_falls_back_to_source() {
        let record: WorkloadRecord =
            serde_json::from_str(r#"{"Source": "statspack_02.lst"}"#).unwrap();
        assert_eq!(record.rank_label(), "statspack_02.lst");
    }

    #[test]
    fn test_cell_text_rendering() {
        assert_eq!(cell_text(&json!("m5.xlarge")), "m5.xlarge");
        assert_eq!(cell_text(&json!(16)), "16");
        assert_eq!(cell_text(&json!(220.5)), "220.5");
        assert_eq!(cell_text(&Value::Null), "-");
        assert_eq!(cell_text(&json!("")), "-");
    }

    #[test]
    fn test_placeholder_cost_is_zero() {
        let record: WorkloadRecord =
            serde_json::from_str(r#"{"Monthly Cost (USD)": "-"}"#).unwrap();
        assert_eq!(record.monthly_cost(), 0.0);
    }
}
