//! camera-config
//!
//! Interactive editor for the capture device (camera) configuration of a
//! reef-pi aquarium controller: a local edit buffer with dirty tracking,
//! commit-time validation and fire-and-forget persistence.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod services;
pub mod state;
pub mod views;
