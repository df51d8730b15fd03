//! Credentials and token refresh
//!
//! A `Credential` is an immutable bearer token value. Refreshing never
//! mutates an existing credential; the `TokenRefresher` returns a new one
//! and callers decide what to replace.

mod credential;

pub use credential::{Credential, TokenRefresher};
