//! Form state machine

mod controller;
mod event;
mod state;

pub use controller::*;
pub use event::*;
pub use state::*;
