//! # Command Handlers
//!
//! Contains specific handler functions for each supported command.
//! These handlers are invoked by the `CommandProcessor`.

pub mod block;
pub mod help;
