//! Termfolio - An interactive portfolio for the terminal
//!
//! This library renders a single-page personal portfolio as a terminal
//! application: a scrollable page with a sticky navigation bar, animated
//! section reveals, counting stat cards, a contact form wired to a mail
//! relay, and a handful of playful effects.
//!
//! # Features
//! - **tui**: Interactive terminal interface (default)
//! - **cli**: Command-line interface (send, about, config)
//! - **full**: All features enabled
//!
//! # Architecture
//! - `content`: Profile data model and embedded default content
//! - `effects`: Pure animation state machines (scroll, reveal, counters, ...)
//! - `mailer`: Contact message delivery through an HTTP mail relay
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Configuration, logging, and panic handling

#[cfg(feature = "cli")]
pub mod cli;
pub mod content;
pub mod effects;
pub mod errors;
pub mod interfaces;
pub mod mailer;
pub mod runtime;
pub mod system;
pub mod utils;
