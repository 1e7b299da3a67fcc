//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `signup_form`: The signup form screen

mod field_renderer;
mod signup_form;

pub use field_renderer::draw_help_text;
pub use signup_form::draw_signup;
