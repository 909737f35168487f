//! Discord interactions webhook.
//!
//! Receives interaction callbacks over HTTP, verifies the Ed25519
//! signed-request envelope, and answers each interaction with a single
//! JSON response. Stateless; the only cross-request data is the read-only
//! configuration carried in the router state.

pub mod controller;
pub mod shared;

pub use controller::create_router;
