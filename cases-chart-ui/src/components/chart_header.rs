//! Chart header showing the dashboard title and the active series.

use crate::state::AppState;
use cases_data::Dataset;
use cases_utils::dates::format_date;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Dashboard title
    pub title: String,
}

/// "Data from <first> to <last>" for the loaded records, if there are any.
pub fn span_caption(dataset: &Dataset) -> Option<String> {
    dataset
        .date_span()
        .map(|(first, last)| format!("Data from {} to {}", format_date(&first), format_date(&last)))
}

/// Header with the dashboard title, the loaded date span and the title of
/// the last rendered chart.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    let state = use_context::<AppState>();
    let series_title = (state.chart_title)();
    let caption = state.dataset.read().as_deref().and_then(span_caption);

    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if let Some(caption) = caption {
                p {
                    style: "margin: 0 0 2px 0; font-size: 11px; color: #999;",
                    "{caption}"
                }
            }
            if !series_title.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{series_title}"
                }
            }
        }
    }
}
