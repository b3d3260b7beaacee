//! Form data types

mod field;
mod product;

pub use field::*;
pub use product::*;
