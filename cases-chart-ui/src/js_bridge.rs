//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js line chart lives in `assets/js/line-chart.js` and is evaluated as
//! a global once D3 itself has loaded. Series and config are serialized to JSON
//! and spliced into the call as object literals.

use cases_data::ChartSeries;
use serde::Serialize;

// Embed the chart script at compile time
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");

/// Axis labels and styling for the line chart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub color: String,
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            x_axis_label: "Date".to_string(),
            y_axis_label: "Cases".to_string(),
            color: "#1f77b4".to_string(),
            height: 420,
        }
    }
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Cases JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize the chart script with a wait-for-D3 polling loop.
///
/// The script is evaluated at global scope through an indirect `eval` once
/// `d3` exists, then its functions are promoted to `window.*`.
pub fn init_charts() {
    let store_js = format!(
        "window.__casesChartScript = {};",
        serde_json::to_string(LINE_CHART_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__casesChartsReady) { return; }
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__casesChartScript);
                    delete window.__casesChartScript;
                    if (typeof renderLineChart !== 'undefined') window.renderLineChart = renderLineChart;
                    if (typeof destroyLineChart !== 'undefined') window.destroyLineChart = destroyLineChart;
                    window.__casesChartsReady = true;
                    console.log('Cases charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render `series` as a line chart into the element with `container_id`.
///
/// Each call replaces the pending payload for `container_id`; one shared
/// poll draws whatever is pending once D3, the chart script and the container
/// all exist. An empty series draws the axes frame with a "no data" note.
pub fn render_line_chart(container_id: &str, series: &ChartSeries, config: &ChartConfig) {
    let data_json = match serde_json::to_string(series) {
        Ok(json) => json,
        Err(e) => {
            log::error!("failed to serialize chart series: {}", e);
            return;
        }
    };
    let config_json = serde_json::to_string(config).unwrap_or_else(|_| "{}".to_string());
    call_js(&render_script(container_id, &data_json, &config_json));
}

/// Queue the latest render for a container and make sure one poll drains it.
///
/// Only the newest payload per container survives, so a late poll can never
/// draw an older series over a newer one.
fn render_script(container_id: &str, data_json: &str, config_json: &str) -> String {
    format!(
        r#"
        (function() {{
            var pending = window.__casesPendingRenders || (window.__casesPendingRenders = {{}});
            pending['{container_id}'] = {{ data: {data_json}, config: {config_json} }};
            if (window.__casesRenderPoll) {{ return; }}
            var flush = function() {{
                if (!window.__casesChartsReady || typeof window.renderLineChart === 'undefined') {{
                    return false;
                }}
                Object.keys(pending).forEach(function(id) {{
                    if (!document.getElementById(id)) {{ return; }}
                    var job = pending[id];
                    delete pending[id];
                    try {{
                        window.renderLineChart(id, job.data, job.config);
                    }} catch(e) {{ console.error('[Cases] renderLineChart error:', e); }}
                }});
                return Object.keys(pending).length === 0;
            }};
            if (flush()) {{ return; }}
            window.__casesRenderPoll = setInterval(function() {{
                if (flush()) {{
                    clearInterval(window.__casesRenderPoll);
                    window.__casesRenderPoll = null;
                }}
            }}, 100);
        }})();
        "#,
    )
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "if (window.__casesPendingRenders) delete window.__casesPendingRenders['{container_id}'];"
    ));
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id));
    if let Some(element) = element {
        element.set_inner_html("");
    }
}

/// Set the live value of the `<input>` with `input_id`.
///
/// Used when a widget rejects a drag: the DOM keeps the dragged position
/// unless it is written back.
pub fn set_input_value(input_id: &str, value: usize) {
    call_js(&format!(
        "var el = document.getElementById('{input_id}'); if (el) el.value = '{value}';"
    ));
}
