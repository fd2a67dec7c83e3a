//! Camera Feature
//!
//! Camera configuration page: controller wiring the page state to its
//! collaborators.

pub mod controller;

pub use controller::CameraConfigController;
