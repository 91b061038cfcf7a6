//! GUI components

pub mod result_panel;
pub mod url_form;

// Re-export for convenience
pub use result_panel::result_panel;
pub use url_form::url_form;
