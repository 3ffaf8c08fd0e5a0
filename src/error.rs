//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`, while
//! main uses `anyhow` for convenient error propagation.
//!
//! # Design
//!
//! - [`Error`]: Top-level application error enum
//! - [`MetadataError`](crate::metadata::MetadataError) for the external API,
//!   converted via `#[from]`
//! - The request layer maps variants onto HTTP status codes: not-found to
//!   404, validation to 400, everything else (page-out-of-range included)
//!   to 500

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
///
/// Aggregates errors from all subsystems for unified handling.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No song with the requested ID exists.
    #[error("song with id {0} not found")]
    SongNotFound(i64),

    /// Storage connectivity or constraint failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// External metadata API failure.
    #[error("metadata lookup failed: {0}")]
    Metadata(#[from] crate::metadata::MetadataError),

    /// Requested verse page starts past the last verse.
    #[error("verse page {page} is out of range ({total_verses} verses total)")]
    PageOutOfRange { page: u32, total_verses: usize },

    /// Malformed input, caught at the request boundary.
    #[error("validation error: {0}")]
    Validation(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }

    /// Whether this error (or its root cause) is a missing-row failure.
    ///
    /// Used by the request layer to pick 404 even when context was added.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::SongNotFound(_) => true,
            Self::WithContext { source, .. } => source.is_not_found(),
            _ => false,
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, sqlx::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Database(e).context(ctx))
    }
}
