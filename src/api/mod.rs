//! HTTP request layer.
//!
//! Binds inbound requests to typed inputs, delegates to
//! [`SongService`](crate::service::SongService), and serializes results.
//! Error classification: not-found maps to 404, boundary validation to
//! 400, everything else to 500 with a JSON `{ "error": ... }` body.

pub mod handlers;
pub mod router;

pub use router::router;
