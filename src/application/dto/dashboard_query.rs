use crate::workload_analysis::services::{FilterCriteria, DEFAULT_PAGE_SIZE};

/// DashboardQuery - Internal request DTO for the dashboard use case
#[derive(Debug, Clone)]
pub struct DashboardQuery {
    pub criteria: FilterCriteria,
    pub page: usize,
    pub page_size: usize,
    pub include_charts: bool,
}

impl DashboardQuery {
    pub fn new(criteria: FilterCriteria, page: usize, include_charts: bool) -> Self {
        Self {
            criteria,
            page,
            page_size: DEFAULT_PAGE_SIZE,
            include_charts,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }
}

impl Default for DashboardQuery {
    fn default() -> Self {
        Self::new(FilterCriteria::default(), 1, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = DashboardQuery::default();
        assert!(query.criteria.is_empty());
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
        assert!(query.include_charts);
    }

    #[test]
    fn test_page_size_floor() {
        let query = DashboardQuery::default().with_page_size(0);
        assert_eq!(query.page_size, 1);
    }
}
