//! Event handling.
//!
//! This module processes terminal input and turns it into actions.

mod handler;
mod input;

pub use handler::EventHandler;
pub use input::InputEvent;
