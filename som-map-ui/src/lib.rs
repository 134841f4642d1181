//! Dioxus components and Leaflet bridge for the species observations map.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet map functions via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selector, legend, containers, etc.)

pub mod js_bridge;
pub mod state;
pub mod components;
