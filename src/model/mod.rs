//! Core data models for the song catalog.
//!
//! [`Song`] is the persisted entity, mapped from the `songs` table via SQLx.
//! The remaining types are request-scoped: [`SongInput`] is the client-supplied
//! shape (storage assigns IDs and timestamps), [`SongFilter`] and
//! [`VersePagination`] bind query parameters, and [`SongWithVerses`] is
//! computed per request and never stored.
//!
//! JSON field names follow the public wire format: `group`, `song`,
//! `releaseDate`, `text`, `link`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A song in the catalog.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Song {
    /// Database ID (auto-generated, immutable once assigned)
    pub id: i64,
    /// Performing group or artist
    #[serde(rename = "group")]
    pub group_name: String,
    /// Song title
    #[serde(rename = "song")]
    pub song_name: String,
    /// Release date as free-form text (not validated as a date)
    #[serde(rename = "releaseDate")]
    pub release_date: String,
    /// Full lyrics; verses separated by blank lines
    pub text: String,
    /// External link for the song
    pub link: String,
    /// Set by storage on insert
    pub created_at: DateTime<Utc>,
    /// Refreshed by storage on every update
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied song fields.
///
/// IDs and timestamps never come from the client, so request bodies
/// deserialize into this type rather than [`Song`].
#[derive(Debug, Clone, Deserialize)]
pub struct SongInput {
    /// Performing group or artist (required, non-empty)
    #[serde(rename = "group")]
    pub group_name: String,
    /// Song title (required, non-empty)
    #[serde(rename = "song")]
    pub song_name: String,
    /// Release date text (overwritten by enrichment on create)
    #[serde(rename = "releaseDate", default)]
    pub release_date: String,
    /// Lyrics text (overwritten by enrichment on create)
    #[serde(default)]
    pub text: String,
    /// External link (overwritten by enrichment on create)
    #[serde(default)]
    pub link: String,
}

/// Listing filter and pagination, bound from query parameters.
///
/// Empty filter strings mean "no predicate", never a literal match
/// against the empty string.
#[derive(Debug, Clone, Deserialize)]
pub struct SongFilter {
    /// Case-insensitive substring match on group name
    #[serde(default)]
    pub group: String,
    /// Case-insensitive substring match on song name
    #[serde(default)]
    pub song: String,
    /// Substring match on the release date text
    #[serde(default)]
    pub release_date: String,
    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: u32,
    /// Rows per page
    #[serde(default = "default_list_page_size")]
    pub page_size: u32,
}

impl Default for SongFilter {
    fn default() -> Self {
        Self {
            group: String::new(),
            song: String::new(),
            release_date: String::new(),
            page: default_page(),
            page_size: default_list_page_size(),
        }
    }
}

/// Verse pagination, bound from `verse_page` / `verse_size` query parameters.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct VersePagination {
    /// 1-based verse page number
    #[serde(rename = "verse_page", default = "default_page")]
    pub page: u32,
    /// Verses per page
    #[serde(rename = "verse_size", default = "default_verse_page_size")]
    pub page_size: u32,
}

impl Default for VersePagination {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_verse_page_size(),
        }
    }
}

/// A song with one page of its verses, computed on demand.
#[derive(Debug, Clone, Serialize)]
pub struct SongWithVerses {
    /// The underlying song, flattened into the response object
    #[serde(flatten)]
    pub song: Song,
    /// The requested contiguous slice of verses
    pub verses: Vec<String>,
    /// Total verse count of the whole text
    pub total_verses: usize,
    /// The page that was requested (not clamped)
    pub current_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_list_page_size() -> u32 {
    10
}

fn default_verse_page_size() -> u32 {
    4
}
