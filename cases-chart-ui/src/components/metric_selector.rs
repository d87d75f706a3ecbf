//! Dropdown selector for the plotted metric.

use crate::state::AppState;
use cases_data::{Metric, SelectionEvent};
use dioxus::prelude::*;

/// Positive/Negative dropdown.
#[component]
pub fn MetricSelector() -> Element {
    let mut state = use_context::<AppState>();
    let current = state
        .selection
        .read()
        .as_ref()
        .map(|s| s.metric)
        .unwrap_or_default();

    let on_change = move |evt: Event<FormData>| {
        // Option values come from Metric::as_str, so parsing cannot fail.
        let metric = match evt.value().parse::<Metric>() {
            Ok(metric) => metric,
            Err(e) => panic!("metric selector produced an unknown option: {e}"),
        };
        state.dispatch(SelectionEvent::MetricChanged(metric));
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "metric-select",
                style: "display: block; font-weight: bold; margin-bottom: 4px;",
                "Positive/Negative"
            }
            select {
                id: "metric-select",
                style: "width: 100%;",
                onchange: on_change,
                for metric in Metric::ALL {
                    option {
                        value: metric.as_str(),
                        selected: metric == current,
                        "{metric}"
                    }
                }
            }
        }
    }
}
