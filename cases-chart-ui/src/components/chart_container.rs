//! Chart container component.

use crate::state::AppState;
use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    /// Optional minimum height in pixels
    #[props(default = 420)]
    pub min_height: u32,
}

/// A container div for the D3.js line chart, with a point count footer.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let state = use_context::<AppState>();
    let count = (state.point_count)();
    let style = format!(
        "min-height: {}px; position: relative; flex: 1 1 600px;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
            p {
                style: "font-size: 11px; color: #888; text-align: right; margin: 4px 0 0 0;",
                "{count} points"
            }
        }
    }
}
