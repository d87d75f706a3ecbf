//! Two-handle range control over month bucket indices.

use crate::js_bridge;
use crate::state::AppState;
use cases_data::SelectionEvent;
use dioxus::prelude::*;

const START_INPUT_ID: &str = "month-range-start";
const END_INPUT_ID: &str = "month-range-end";

/// Where a dragged start handle lands: never past the end handle.
fn clamp_start(value: usize, end: usize) -> usize {
    value.min(end)
}

/// Where a dragged end handle lands: never before the start handle or past `max`.
fn clamp_end(value: usize, start: usize, max: usize) -> usize {
    value.max(start).min(max)
}

/// Month range control spanning `[0, N]` where `N` is the bucket count.
///
/// Built from two range inputs. A handle dragged past the other one stops at
/// it, so every emitted event has `start <= end`. When the stop leaves the
/// selection unchanged nothing re-renders, so the input is written back.
#[component]
pub fn MonthRangeSlider() -> Element {
    let mut state = use_context::<AppState>();
    let max = state.month_count();
    let (start, end) = state
        .selection
        .read()
        .as_ref()
        .map(|s| (s.range.start, s.range.end))
        .unwrap_or((0, 0));

    let on_start = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<usize>() {
            let start = clamp_start(value, end);
            state.dispatch(SelectionEvent::RangeChanged { start, end });
            if start != value {
                js_bridge::set_input_value(START_INPUT_ID, start);
            }
        }
    };

    let on_end = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<usize>() {
            let end = clamp_end(value, start, max);
            state.dispatch(SelectionEvent::RangeChanged { start, end });
            if end != value {
                js_bridge::set_input_value(END_INPUT_ID, end);
            }
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; flex-direction: column; gap: 4px;",
            input {
                id: START_INPUT_ID,
                r#type: "range",
                aria_label: "Range start",
                min: "0",
                max: "{max}",
                step: "1",
                value: "{start}",
                oninput: on_start,
            }
            input {
                id: END_INPUT_ID,
                r#type: "range",
                aria_label: "Range end",
                min: "0",
                max: "{max}",
                step: "1",
                value: "{end}",
                oninput: on_end,
            }
        }
    }
}
