//! HTTP listener startup.
//!
//! Plain HTTP only; TLS is expected to terminate at the ingress in front of
//! the replicas.

mod server;

pub use server::{bind_address, start_server, ServerError};
