//! Dropdown selector for choosing a region.

use crate::state::AppState;
use cases_data::SelectionEvent;
use dioxus::prelude::*;

/// Region dropdown. Options are the dataset's regions in first-seen order.
#[component]
pub fn RegionSelector() -> Element {
    let mut state = use_context::<AppState>();
    let regions: Vec<String> = state
        .dataset
        .read()
        .as_ref()
        .map(|d| d.regions().to_vec())
        .unwrap_or_default();
    let selected = state
        .selection
        .read()
        .as_ref()
        .map(|s| s.region.clone())
        .unwrap_or_default();

    let on_change = move |evt: Event<FormData>| {
        state.dispatch(SelectionEvent::RegionChanged(evt.value()));
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "region-select",
                style: "display: block; font-weight: bold; margin-bottom: 4px;",
                "State"
            }
            select {
                id: "region-select",
                style: "width: 100%;",
                onchange: on_change,
                for region in regions.iter() {
                    option {
                        value: "{region}",
                        selected: *region == selected,
                        "{region}"
                    }
                }
            }
        }
    }
}
