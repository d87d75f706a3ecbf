//! Dioxus widgets, reactive state and D3.js bridge for the case trends dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js line chart via `js_sys::eval()`
//! - `state`: reactive `AppState` with Dioxus Signals and event dispatch
//! - `sink`: a `RenderSink` that forwards rendered views to the chart and signals
//! - `components`: the selectors, month range slider, label and chart container

pub mod components;
pub mod js_bridge;
pub mod sink;
pub mod state;
