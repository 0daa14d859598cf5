//! Conversions at the edges of a service: RPC status in both directions,
//! HTTP replies, and datastore failures.

pub mod datastore;
pub mod http;
pub mod rpc;
