pub mod chart_builder;
pub mod dashboard_state;
pub mod record_filter;

pub use chart_builder::{build_chart_datasets, ChartDataset, ChartKind, ChartPoint};
pub use dashboard_state::{DashboardState, DEFAULT_PAGE_SIZE};
pub use record_filter::FilterCriteria;
