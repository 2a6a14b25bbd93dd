//! Core library components.
//!
//! Tag scanning, encryption methods, option resolution and action dispatch.
//! Nothing in here prints; the CLI layer owns the terminal.

pub mod actions;
pub mod cipher;
pub mod config;
pub mod constants;
pub mod dispatch;
pub mod format;
pub mod marker;
pub mod prompt;
pub mod resolve;
pub mod tag;
