//! # TLDR Protocols
//!
//! Data types shared by every TLDR crate: the document categories the
//! extractor recognizes, the extraction result, and the JSON contract spoken
//! with the summarization backend.
//! Contains only definitions - no I/O.

pub mod error;
pub mod types;

pub use error::{BackendError, ExtractError};
pub use types::*;
