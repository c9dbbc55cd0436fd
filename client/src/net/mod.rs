//! Networking for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` sends prepared requests with `gloo-net`; `client` assembles the
//! refresh-once [`session::AuthedClient`] pages call into.

pub mod client;
pub mod transport;
