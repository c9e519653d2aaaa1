//! HTTP transport for the retrieval backend.
//!
//! Implements the `Backend` trait against the book assistant's HTTP+JSON
//! API (`/chat`, `/history`, `/sessions/clear`). One request per call,
//! no retries, no auth; the caller owns all conversation state.

mod api;
mod client;
mod config;

pub use client::HttpBackend;
pub use config::{BackendConfig, DEFAULT_BACKEND_URL};
