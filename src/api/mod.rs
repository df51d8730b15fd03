//! Airbyte API surface
//!
//! Typed models for the subset of the Airbyte REST API the checkers use,
//! plus the endpoint calls themselves. Detail and probe payloads are kept
//! as raw JSON because the envelopes pass them through untouched.

mod client;
mod types;

pub use client::AirbyteApi;
pub use types::{selected_streams, Connection, ListResponse, Source, SourceCheck};
