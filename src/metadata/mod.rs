//! Metadata fetcher - retrieves song details from the external music API.
//!
//! # Architecture
//!
//! - **Domain model** ([`SongInfo`]) - our type, stable across API changes
//! - **API DTOs** (`dto.rs`) - exact API response shapes
//! - **Client** (`client.rs`) - HTTP client for the `/info` endpoint
//! - **Traits** (`traits.rs`) - injection seam so tests can substitute mocks
//!
//! The fetch is a single attempt: no retry, no backoff, no internal
//! timeout. Callers that need a deadline wrap the HTTP client externally.

pub mod client;
pub mod dto;
pub mod traits;

pub use client::MetadataClient;
pub use traits::SongInfoApi;

/// Song details obtained from the external metadata API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongInfo {
    /// Release date as free-form text
    pub release_date: String,
    /// Full lyrics text
    pub text: String,
    /// External link for the song
    pub link: String,
}

/// Errors that can occur while fetching song metadata.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MetadataError {
    /// Transport-level failure (DNS, connect, TLS, ...)
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-success status.
    #[error("metadata API returned HTTP {status}")]
    Upstream { status: u16 },

    /// The response body was not the expected shape.
    #[error("failed to decode metadata response: {0}")]
    Decode(String),
}
