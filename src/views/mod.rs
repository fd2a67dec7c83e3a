//! Views - Interaction Surface
//!
//! Rendering of the camera page. The form projection is toolkit neutral; the
//! text renderer backs the terminal front end.

pub mod config_view;
pub mod text;

pub use config_view::{ButtonVariant, ConfigForm, ConfigView, FormRow, PageView, Widget};
pub use text::render_text;
