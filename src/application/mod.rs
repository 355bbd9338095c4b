//! # Application Layer
//!
//! Contains the core logic of the bot: command parsing, dispatch, and logging setup.

pub mod logging;
pub mod parsing;
pub mod processor;
