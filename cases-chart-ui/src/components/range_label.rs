//! Text label describing the active date range.

use crate::state::AppState;
use dioxus::prelude::*;

/// Shows the label produced by the last render, so it always matches the chart.
#[component]
pub fn RangeLabel() -> Element {
    let state = use_context::<AppState>();
    let label = (state.range_label)();

    rsx! {
        div {
            style: "margin: 8px 0; font-weight: bold; font-variant-numeric: tabular-nums;",
            "{label}"
        }
    }
}
