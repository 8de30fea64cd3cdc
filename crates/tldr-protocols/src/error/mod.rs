//! Error types for the TLDR protocol layer.

mod backend;
mod extract;

pub use backend::*;
pub use extract::*;
