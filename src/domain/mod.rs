//! Domain - Core Data Types
//!
//! The camera configuration record and its edit-time representation.

pub mod camera;
