//! Music info HTTP client
//!
//! Handles communication with the external song metadata service.
//! The endpoint is `GET <base>/info?group=<g>&song=<s>` and returns a
//! JSON object with `releaseDate`, `text`, and `link` fields.

use super::{MetadataError, SongInfo, dto};

/// Music info API client
pub struct MetadataClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl MetadataClient {
    /// Create a new client against the given base URL.
    ///
    /// The client sends a User-Agent header identifying the application.
    /// No timeout is configured here; deployments that need one set it on
    /// the reqwest builder via [`MetadataClient::with_http_client`].
    pub fn new(base_url: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .expect("Failed to build HTTP client");

        Self::with_http_client(http_client, base_url)
    }

    /// Create a client with a caller-configured reqwest client.
    pub fn with_http_client(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Fetch release date, lyrics, and link for a (group, song) pair.
    ///
    /// Single attempt: any transport failure is [`MetadataError::Network`],
    /// a non-success status is [`MetadataError::Upstream`], and a body that
    /// doesn't match the expected shape is [`MetadataError::Decode`].
    pub async fn get_song_info(&self, group: &str, song: &str) -> Result<SongInfo, MetadataError> {
        let url = format!("{}/info", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[("group", group), ("song", song)])
            .send()
            .await
            .map_err(|e| MetadataError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MetadataError::Upstream {
                status: status.as_u16(),
            });
        }

        let info = response
            .json::<dto::SongInfoResponse>()
            .await
            .map_err(|e| MetadataError::Decode(e.to_string()))?;

        Ok(info.into())
    }
}
