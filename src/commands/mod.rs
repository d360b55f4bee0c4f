//! HTTP Command Wrappers
//!
//! Frontend bindings to the resources API.

mod resources;

pub use resources::*;
