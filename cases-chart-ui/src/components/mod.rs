//! Reusable Dioxus RSX components for the dashboard.

mod chart_container;
mod chart_header;
mod metric_selector;
mod month_range_slider;
mod range_label;
mod region_selector;
mod status;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use metric_selector::MetricSelector;
pub use month_range_slider::MonthRangeSlider;
pub use range_label::RangeLabel;
pub use region_selector::RegionSelector;
pub use status::{ErrorDisplay, LoadingSpinner};
