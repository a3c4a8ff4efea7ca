//! Domain models for the dose engine.

mod request;
mod resolution;
mod result;

pub use request::*;
pub use resolution::*;
pub use result::*;
