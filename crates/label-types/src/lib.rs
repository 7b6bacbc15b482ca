//! Framework-free core of the floating input label: prop tokens, ambient
//! form-control state, owner-state resolution, class composition, ordered
//! style rules and the theme they read from.

pub mod classes;
pub mod error;
pub mod form_control;
pub mod form_label;
pub mod input_label;
pub mod input_label_style;
pub mod style;
pub mod theme;
pub mod tokens;

pub use classes::*;
pub use error::*;
pub use form_control::*;
pub use form_label::*;
pub use input_label::*;
pub use input_label_style::*;
pub use style::*;
pub use theme::*;
pub use tokens::*;
