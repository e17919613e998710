//! HTTP transport for the connections API.
//!
//! This module provides the client that issues requests on behalf of the
//! session operations, and the endpoint definitions it talks to.

mod client;
pub mod endpoints;

pub use client::ApiClient;
