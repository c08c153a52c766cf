//! Reusable UI components

mod button;
mod card;
mod dialog;
mod input;

pub use button::{render_button, ButtonProps, ButtonSize, ButtonVariant, BUTTON_HEIGHT};
pub use card::{render_card, CardProps};
pub use dialog::{error_dialog_area, render_error_dialog};
pub use input::{render_checkbox, render_input, InputProps, CHECKBOX_HEIGHT, INPUT_HEIGHT};
