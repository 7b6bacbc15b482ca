pub mod form_control;
pub mod form_label;
// Depends on form_control and form_label
pub mod input_label;

// Re-exports for convenience
pub use form_control::*;
pub use form_label::*;
pub use input_label::*;
