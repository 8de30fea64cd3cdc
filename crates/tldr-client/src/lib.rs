//! Client for the external summarization backend.
//!
//! The backend is a black box reached over two endpoints:
//! `POST /api/summarize` and `GET /api/health`.

mod client;

pub use client::{BackendClient, HEALTH_PATH, SUMMARIZE_PATH};
