//! HTTP client module
//!
//! A thin JSON client over reqwest: base URL joining, bearer auth, request
//! timeout, and HTTP status to error mapping. Each tool call performs one
//! to three sequential round-trips, so there is no retry or rate limiting
//! layer here.

mod client;

pub use client::{ApiClient, ApiClientConfig};

#[cfg(test)]
mod tests;
