//! Dialog components for TUI

mod base;
mod error_dialog;

pub use error_dialog::{error_dialog_area, render_error_dialog};
