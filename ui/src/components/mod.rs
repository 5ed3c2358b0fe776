//! User Interface Components
//!
//! Reusable Dioxus components for the classifier page:
//!
//! - **forms**: the JSON entry form with its submit control
//! - **display**: error banner, field selector, and results panel
//! - **inputs**: the text area bound to the raw input

pub mod display;
pub mod forms;
pub mod inputs;
