//! Case Trends by State
//!
//! A single line chart of daily positive or negative test counts for one
//! state, with a state selector, a metric selector and a month range control.
//!
//! Data flow:
//! 1. `build.rs` copies the dataset CSV (`CASES_DATASET`) into `OUT_DIR`.
//! 2. `include_str!` embeds it into the WASM binary.
//! 3. On mount: parse and clean the CSV, build the initial selection.
//! 4. On every selection change: project the series and render it into the
//!    D3.js chart and the range label through one `ChartSink`.

use cases_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, MetricSelector, MonthRangeSlider,
    RangeLabel, RegionSelector,
};
use cases_chart_ui::js_bridge;
use cases_chart_ui::sink::ChartSink;
use cases_chart_ui::state::AppState;
use cases_data::{project, render, Dataset, Selection};
use dioxus::prelude::*;
use std::sync::Arc;

/// Dataset embedded at compile time.
const DATASET_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/dataset.csv"));

/// DOM id for the D3 chart container div.
const CHART_ID: &str = "case-trends-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new().launch(App);
}

/// Parse the embedded dataset and seed the first selection.
fn load_embedded() -> anyhow::Result<(Arc<Dataset>, Selection)> {
    let dataset = Dataset::from_csv_str(DATASET_CSV)?;
    let selection = Selection::initial(&dataset)?;
    Ok((Arc::new(dataset), selection))
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Load the dataset once on mount ───
    use_effect(move || match load_embedded() {
        Ok((dataset, selection)) => {
            log::info!(
                "dataset ready: {} regions, {} months",
                dataset.regions().len(),
                dataset.month_buckets().len()
            );
            state.install(dataset, selection);
            js_bridge::init_charts();
        }
        Err(e) => state.fail(format!("{e:#}")),
    });

    // ─── Effect 2: Project and render on every selection change ───
    use_effect(move || {
        let Some(selection) = (state.selection)() else {
            return;
        };
        let Some(dataset) = state.dataset.read().clone() else {
            return;
        };
        let projection = project(&dataset, &selection);
        let mut sink = ChartSink::new(CHART_ID, state);
        render(&projection, &selection, &mut sink);
    });

    use_drop(|| js_bridge::destroy_chart(CHART_ID));

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            ChartHeader { title: "Case Trends by State".to_string() }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: flex-start;",
                    div {
                        style: "flex: 0 0 300px;",
                        RangeLabel {}
                        MonthRangeSlider {}
                        MetricSelector {}
                        RegionSelector {}
                    }
                    ChartContainer {
                        id: CHART_ID.to_string(),
                        min_height: 450,
                    }
                }
            }
        }
    }
}
