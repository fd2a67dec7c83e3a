//! Eventing - Events Flowing to the Front End

pub mod ui_event;

pub use ui_event::UIEvent;
