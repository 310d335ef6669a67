//! Backend communication: wire types, the HTTP client, and the question relay.

pub mod api;
pub mod relay;
pub mod types;
