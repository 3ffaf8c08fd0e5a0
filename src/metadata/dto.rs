//! Music info API Data Transfer Objects
//!
//! These types match EXACTLY what the external API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the metadata module - convert to
//! [`SongInfo`](super::SongInfo).

use serde::Deserialize;

/// Response of `GET /info?group=<g>&song=<s>`.
#[derive(Debug, Clone, Deserialize)]
pub struct SongInfoResponse {
    /// Release date as free-form text
    #[serde(rename = "releaseDate")]
    pub release_date: String,
    /// Full lyrics text, verses separated by blank lines
    pub text: String,
    /// Link to the song
    pub link: String,
}

impl From<SongInfoResponse> for super::SongInfo {
    fn from(dto: SongInfoResponse) -> Self {
        Self {
            release_date: dto.release_date,
            text: dto.text,
            link: dto.link,
        }
    }
}
