//! TUI 应用核心模块

mod mail_operations;
mod navigation;
pub mod state;
mod validation;

pub use state::{
    App, ContactField, ContactFormState, CurrentScreen, HoverTarget, HoverZone, RevealId,
    SendState,
};
