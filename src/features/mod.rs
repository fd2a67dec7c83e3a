//! Features - Vertical Feature Slices
//!
//! Each feature contains its controller and local wiring.

pub mod camera;
