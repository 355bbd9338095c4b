//! # Interface Layer
//!
//! Handlers for the chat commands the bot understands.

pub mod commands;
