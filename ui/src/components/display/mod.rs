pub mod error_banner;
pub mod field_selector;
pub mod results_panel;

pub use error_banner::*;
pub use field_selector::*;
pub use results_panel::*;
