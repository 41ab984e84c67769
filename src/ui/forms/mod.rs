//! Form rendering module
//!
//! This module contains UI components shared by the feature views:
//! - `field_renderer`: Field and help text rendering
//! - `action_panel`: Buttons and request status beside a form

mod action_panel;
mod field_renderer;

pub use action_panel::{draw_action_panel, split};
pub use field_renderer::{draw_field, draw_help_text};
