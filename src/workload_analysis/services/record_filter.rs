use crate::workload_analysis::domain::WorkloadRecord;

/// Pure predicate over cloud/source/date, combined by conjunction.
///
/// Cloud and source compare case-insensitively for equality; the date is a
/// prefix match against the record timestamp, so "2025-11-03" matches any
/// time on that day. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub cloud: Option<String>,
    pub source: Option<String>,
    pub date: Option<String>,
}

impl FilterCriteria {
    pub fn new(cloud: Option<String>, source: Option<String>, date: Option<String>) -> Self {
        // Blank strings behave the same as an absent filter field.
        let normalize = |field: Option<String>| {
            field.and_then(|s| {
                let trimmed = s.trim().to_string();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed)
                }
            })
        };
        Self {
            cloud: normalize(cloud),
            source: normalize(source),
            date: normalize(date),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cloud.is_none() && self.source.is_none() && self.date.is_none()
    }

    pub fn matches(&self, record: &WorkloadRecord) -> bool {
        let match_cloud = self.cloud.as_deref().map_or(true, |wanted| {
            record
                .cloud
                .as_deref()
                .unwrap_or("")
                .eq_ignore_ascii_case(wanted)
        });
        let match_source = self.source.as_deref().map_or(true, |wanted| {
            record
                .source
                .as_deref()
                .unwrap_or("")
                .eq_ignore_ascii_case(wanted)
        });
        let match_date = self.date.as_deref().map_or(true, |wanted| {
            record
                .timestamp
                .as_deref()
                .unwrap_or("")
                .starts_with(wanted)
        });
        match_cloud && match_source && match_date
    }
}
