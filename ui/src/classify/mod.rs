//! Form controller for the classification page.
//!
//! State, actions, and the reducer live in `types`; the submit pipeline in
//! `logic`. Components dispatch `FormAction`s and read `FormState` through a
//! Dioxus Signal.

pub mod logic;
pub mod types;

pub use types::{FormAction, FormState, RenderedField, ResponseField, UiPhase};
