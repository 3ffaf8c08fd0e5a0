//! Song service - business-level orchestration over the database and the
//! external metadata API.
//!
//! This is the only caller of [`crate::db`] and [`crate::metadata`]. Every
//! operation is a single synchronous request/response; nothing is cached or
//! retried here. The one ordering rule lives in [`SongService::create_song`]:
//! metadata enrichment must succeed strictly before anything is persisted.

use sqlx::sqlite::SqlitePool;

use crate::db;
use crate::error::{Error, Result, ResultExt};
use crate::metadata::SongInfoApi;
use crate::model::{Song, SongFilter, SongInput, SongWithVerses, VersePagination};

/// Orchestrates song CRUD, enrichment, and verse pagination.
///
/// Generic over the metadata client so tests can inject a mock.
pub struct SongService<M> {
    pool: SqlitePool,
    metadata: M,
}

impl<M: SongInfoApi> SongService<M> {
    /// Create a service over the given pool and metadata client.
    pub fn new(pool: SqlitePool, metadata: M) -> Self {
        Self { pool, metadata }
    }

    /// Create a song, enriching it from the metadata API first.
    ///
    /// The fetched release date, text, and link overwrite whatever the
    /// client supplied for those fields. If the fetch fails, nothing is
    /// persisted; the fetch itself has no side effects, so no compensation
    /// is needed when the insert fails afterwards.
    pub async fn create_song(&self, input: SongInput) -> Result<Song> {
        tracing::info!(
            group = %input.group_name,
            song = %input.song_name,
            "Creating new song"
        );

        let info = self
            .metadata
            .get_song_info(&input.group_name, &input.song_name)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    group = %input.group_name,
                    song = %input.song_name,
                    "Failed to get song info from API"
                );
                Error::Metadata(e).context("failed to get song info")
            })?;

        let enriched = SongInput {
            release_date: info.release_date,
            text: info.text,
            link: info.link,
            ..input
        };

        let song = db::create_song(&self.pool, &enriched)
            .await
            .with_context("failed to create song")?;

        tracing::info!(id = song.id, "Successfully created song");
        Ok(song)
    }

    /// Overwrite all mutable fields of an existing song. No enrichment.
    pub async fn update_song(&self, id: i64, input: SongInput) -> Result<Song> {
        tracing::info!(id, group = %input.group_name, song = %input.song_name, "Updating song");

        let song = db::update_song(&self.pool, id, &input)
            .await
            .with_context("failed to update song")?;

        tracing::info!(id, "Successfully updated song");
        Ok(song)
    }

    /// Delete a song by ID.
    pub async fn delete_song(&self, id: i64) -> Result<()> {
        tracing::info!(id, "Deleting song");

        db::delete_song(&self.pool, id)
            .await
            .with_context("failed to delete song")?;

        tracing::info!(id, "Successfully deleted song");
        Ok(())
    }

    /// Get a song by ID.
    pub async fn get_song(&self, id: i64) -> Result<Song> {
        tracing::debug!(id, "Getting song by ID");
        db::get_song(&self.pool, id).await
    }

    /// List songs matching a filter.
    pub async fn list_songs(&self, filter: &SongFilter) -> Result<Vec<Song>> {
        tracing::debug!(?filter, "Listing songs");
        db::list_songs(&self.pool, filter).await
    }

    /// Get a song together with one page of its verses.
    ///
    /// A page whose start index is at or past the total verse count fails
    /// with [`Error::PageOutOfRange`]. This includes page 1 of a song whose
    /// text is empty after trimming: zero verses means no valid page exists.
    pub async fn song_with_verses(
        &self,
        id: i64,
        pagination: VersePagination,
    ) -> Result<SongWithVerses> {
        tracing::debug!(
            id,
            page = pagination.page,
            page_size = pagination.page_size,
            "Getting song with verses"
        );

        let song = db::get_song(&self.pool, id).await?;

        let verses = split_verses(&song.text);
        let total_verses = verses.len();

        let start = pagination.page.saturating_sub(1) as usize * pagination.page_size as usize;
        if start >= total_verses {
            return Err(Error::PageOutOfRange {
                page: pagination.page,
                total_verses,
            });
        }
        let end = (start + pagination.page_size as usize).min(total_verses);

        Ok(SongWithVerses {
            song,
            verses: verses[start..end].to_vec(),
            total_verses,
            current_page: pagination.page,
        })
    }
}

/// Split lyrics into verses.
///
/// Verses are separated by exactly one blank line (two consecutive
/// newlines) in the trimmed text. Non-empty text with no blank line is a
/// single verse; text that is empty after trimming has zero verses.
pub fn split_verses(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split("\n\n").map(str::to_string).collect()
}
