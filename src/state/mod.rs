//! Application state module

mod app_state;
mod debounce;
mod examples_state;
mod forms;
mod storage;
mod toggle;
mod ui_area;
mod viewport;

pub use app_state::*;
pub use debounce::*;
pub use examples_state::*;
pub use forms::*;
pub use storage::*;
pub use toggle::*;
pub use ui_area::*;
pub use viewport::*;
