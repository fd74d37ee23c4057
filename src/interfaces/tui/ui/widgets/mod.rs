//! 可复用 UI 组件

mod input_field;
mod popup;
mod send_indicator;

pub use input_field::InputField;
pub use popup::{Popup, centered_rect};
pub use send_indicator::SendIndicator;
