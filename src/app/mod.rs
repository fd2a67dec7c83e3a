//! Application Layer
//!
//! Command-line parsing, persisted settings and the interactive loop.

pub mod application;
pub mod cli;
pub mod command;
pub mod settings;
