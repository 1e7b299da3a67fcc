//! Application state module

mod app_state;
mod forms;
mod reference;

pub use app_state::*;
pub use forms::*;
pub use reference::*;

#[cfg(test)]
pub(crate) use forms::valid_form_data;
