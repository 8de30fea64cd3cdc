//! Common types used across TLDR.

mod document;
mod extraction;
mod summary;

pub use document::*;
pub use extraction::*;
pub use summary::*;
