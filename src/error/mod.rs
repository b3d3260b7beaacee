//! Error types

mod service;
mod submit;

pub use service::*;
pub use submit::*;
