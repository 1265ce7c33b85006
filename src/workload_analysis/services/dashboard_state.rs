use crate::workload_analysis::domain::WorkloadRecord;

use super::record_filter::FilterCriteria;

/// Default number of table rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// In-memory dashboard state: the full record set, the filtered view derived
/// from it, and the current page.
///
/// The filtered view is always rebuilt wholesale from the full set, never
/// mutated in place, so `filtered ⊆ all` holds by construction. The page
/// index satisfies `1 <= current_page <= total_pages()` at all times.
#[derive(Debug, Clone)]
pub struct DashboardState {
    all: Vec<WorkloadRecord>,
    filtered: Vec<WorkloadRecord>,
    current_page: usize,
    page_size: usize,
}

impl DashboardState {
    pub fn new(records: Vec<WorkloadRecord>, page_size: usize) -> Self {
        Self {
            filtered: records.clone(),
            all: records,
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Recomputes the filtered view and resets pagination to page 1.
    pub fn apply_filters(&mut self, criteria: FilterCriteria) {
        self.filtered = self
            .all
            .iter()
            .filter(|record| criteria.matches(record))
            .cloned()
            .collect();
        self.current_page = 1;
    }

    /// Restores the full set and resets pagination.
    pub fn clear_filters(&mut self) {
        self.filtered = self.all.clone();
        self.current_page = 1;
    }

    pub fn next_page(&mut self) {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.current_page -= 1;
        }
    }

    /// Jumps to a page, clamped into the valid range.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages());
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size).max(1)
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// The slice of the filtered view shown on the current page.
    pub fn page_rows(&self) -> &[WorkloadRecord] {
        let start = (self.current_page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.filtered.len());
        if start >= self.filtered.len() {
            &[]
        } else {
            &self.filtered[start..end]
        }
    }

    pub fn all_records(&self) -> &[WorkloadRecord] {
        &self.all
    }

    pub fn filtered_records(&self) -> &[WorkloadRecord] {
        &self.filtered
    }

    /// Records charts are derived from: the filtered view when it has any
    /// rows, otherwise the full set (a filter that matches nothing still
    /// charts everything).
    pub fn chart_records(&self) -> &[WorkloadRecord] {
        if self.filtered.is_empty() {
            &self.all
        } else {
            &self.filtered
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize, cloud: &str) -> Vec<WorkloadRecord> {
        (0..n)
            .map(|i| WorkloadRecord {
                cloud: Some(cloud.to_string()),
                db_name: Some(format!("DB{}", i)),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_initial_state_shows_everything() {
        let state = DashboardState::new(records(3, "AWS"), DEFAULT_PAGE_SIZE);
        assert_eq!(state.filtered_records().len(), 3);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.page_rows().len(), 3);
    }

    #[test]
    fn test_filtered_is_subset_of_all() {
        let mut all = records(12, "AWS");
        all.extend(records(13, "Azure"));
        let mut state = DashboardState::new(all, DEFAULT_PAGE_SIZE);

        state.apply_filters(FilterCriteria::new(Some("AWS".to_string()), None, None));
        assert_eq!(state.filtered_records().len(), 12);
        for record in state.filtered_records() {
            assert_eq!(record.cloud.as_deref(), Some("AWS"));
        }
        assert_eq!(state.all_records().len(), 25);
    }

    #[test]
    fn test_pagination_of_filtered_view() {
        // 25 records, filter matches 12: page 1 has 10 rows, page 2 has 2.
        let mut all = records(12, "AWS");
        all.extend(records(13, "Azure"));
        let mut state = DashboardState::new(all, DEFAULT_PAGE_SIZE);
        state.apply_filters(FilterCriteria::new(Some("AWS".to_string()), None, None));

        assert_eq!(state.total_pages(), 2);
        assert_eq!(state.page_rows().len(), 10);
        assert!(state.has_next());
        assert!(!state.has_prev());

        state.next_page();
        assert_eq!(state.current_page(), 2);
        assert_eq!(state.page_rows().len(), 2);
        assert!(!state.has_next());

        // Clamped at the last page.
        state.next_page();
        assert_eq!(state.current_page(), 2);
    }

    #[test]
    fn test_prev_page_clamped_at_one() {
        let mut state = DashboardState::new(records(5, "AWS"), DEFAULT_PAGE_SIZE);
        state.prev_page();
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_page_never_exceeds_page_size() {
        let state = DashboardState::new(records(95, "GCP"), DEFAULT_PAGE_SIZE);
        assert_eq!(state.total_pages(), 10);
        assert!(state.page_rows().len() <= DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_set_page_clamps() {
        let mut state = DashboardState::new(records(25, "AWS"), DEFAULT_PAGE_SIZE);
        state.set_page(99);
        assert_eq!(state.current_page(), 3);
        state.set_page(0);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_apply_filters_resets_page() {
        let mut state = DashboardState::new(records(25, "AWS"), DEFAULT_PAGE_SIZE);
        state.set_page(3);
        state.apply_filters(FilterCriteria::new(Some("AWS".to_string()), None, None));
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_clear_filters_restores_full_set() {
        let mut state = DashboardState::new(records(25, "AWS"), DEFAULT_PAGE_SIZE);
        state.apply_filters(FilterCriteria::new(Some("Azure".to_string()), None, None));
        assert!(state.filtered_records().is_empty());
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.current_page(), 1);

        state.clear_filters();
        assert_eq!(state.filtered_records().len(), 25);
    }

    #[test]
    fn test_empty_state_has_one_page() {
        let state = DashboardState::new(vec![], DEFAULT_PAGE_SIZE);
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.current_page(), 1);
        assert!(state.page_rows().is_empty());
    }

    #[test]
    fn test_chart_records_fall_back_to_full_set() {
        let mut state = DashboardState::new(records(4, "AWS"), DEFAULT_PAGE_SIZE);
        state.apply_filters(FilterCriteria::new(Some("Azure".to_string()), None, None));
        assert_eq!(state.chart_records().len(), 4);

        state.apply_filters(FilterCriteria::new(Some("AWS".to_string()), None, None));
        assert_eq!(state.chart_records().len(), 4);
    }
}
