pub mod classify_form;

pub use classify_form::*;
