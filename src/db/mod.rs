//! Database module for song persistence.
//!
//! Uses SQLx with SQLite for lightweight, embedded database storage.
//! Provides async CRUD operations against the single `songs` table.
//! All functions take a pool reference; the pool's own locking is the
//! only concurrency coordination.
//!
//! # Example
//!
//! ```ignore
//! use songbook::db::{init_db, get_song};
//!
//! let pool = init_db("sqlite:songbook.db").await?;
//! let song = get_song(&pool, 1).await?;
//! ```

use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::error::{Error, Result};
use crate::model::{Song, SongFilter, SongInput};

/// Default database filename.
pub const DEFAULT_DB_NAME: &str = "songbook.db";

const SONG_COLUMNS: &str =
    "id, group_name, song_name, release_date, text, link, created_at, updated_at";

/// Initialize the database connection pool and run migrations.
///
/// Creates the database file if it doesn't exist, establishes a connection
/// pool with up to 5 connections, and runs all pending migrations.
///
/// # Errors
///
/// Returns an error if:
/// - Database creation fails
/// - Connection cannot be established
/// - Migration fails
pub async fn init_db(db_url: &str) -> std::result::Result<SqlitePool, sqlx::Error> {
    if !sqlx::Sqlite::database_exists(db_url).await.unwrap_or(false) {
        sqlx::Sqlite::create_database(db_url).await?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(db_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

/// Insert a new song and return it with storage-assigned fields.
///
/// The ID and both timestamps come from the database; client-supplied
/// values for them never exist at this layer.
pub async fn create_song(pool: &SqlitePool, input: &SongInput) -> Result<Song> {
    let song = sqlx::query_as::<_, Song>(&format!(
        r#"
        INSERT INTO songs (group_name, song_name, release_date, text, link)
        VALUES (?, ?, ?, ?, ?)
        RETURNING {SONG_COLUMNS}
        "#
    ))
    .bind(&input.group_name)
    .bind(&input.song_name)
    .bind(&input.release_date)
    .bind(&input.text)
    .bind(&input.link)
    .fetch_one(pool)
    .await?;

    Ok(song)
}

/// Overwrite all mutable fields of a song by ID.
///
/// Full overwrite semantics, not a partial patch: every field in `input`
/// replaces the stored value. `updated_at` is refreshed by the database.
///
/// # Errors
///
/// [`Error::SongNotFound`] when no row matches the ID.
pub async fn update_song(pool: &SqlitePool, id: i64, input: &SongInput) -> Result<Song> {
    let song = sqlx::query_as::<_, Song>(&format!(
        r#"
        UPDATE songs
        SET group_name = ?, song_name = ?, release_date = ?, text = ?, link = ?,
            updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
        WHERE id = ?
        RETURNING {SONG_COLUMNS}
        "#
    ))
    .bind(&input.group_name)
    .bind(&input.song_name)
    .bind(&input.release_date)
    .bind(&input.text)
    .bind(&input.link)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    song.ok_or(Error::SongNotFound(id))
}

/// Delete a song by ID.
///
/// # Errors
///
/// [`Error::SongNotFound`] when zero rows were affected, so deleting an
/// already-deleted ID fails rather than silently succeeding.
pub async fn delete_song(pool: &SqlitePool, id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM songs WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::SongNotFound(id));
    }

    Ok(())
}

/// Get a song by its database ID.
///
/// # Errors
///
/// [`Error::SongNotFound`] when absent.
pub async fn get_song(pool: &SqlitePool, id: i64) -> Result<Song> {
    let song = sqlx::query_as::<_, Song>(&format!(
        "SELECT {SONG_COLUMNS} FROM songs WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    song.ok_or(Error::SongNotFound(id))
}

/// List songs matching a filter, ordered by ID ascending.
///
/// Group and song name filters are case-insensitive substring matches;
/// the release date filter is a plain substring match on the stored text.
/// An empty filter field skips its predicate entirely. Pagination is
/// `LIMIT page_size OFFSET (page-1)*page_size`; an offset past the last
/// row yields an empty vec, not an error.
pub async fn list_songs(pool: &SqlitePool, filter: &SongFilter) -> Result<Vec<Song>> {
    // SQLite LIKE is case-insensitive for ASCII, which covers the
    // case-insensitive substring contract for names.
    // Saturate the offset: u32 * u32 can exceed i64, and an offset past
    // the last row already means an empty page.
    let offset =
        i64::from(filter.page.saturating_sub(1)).saturating_mul(i64::from(filter.page_size));

    let songs = sqlx::query_as::<_, Song>(&format!(
        r#"
        SELECT {SONG_COLUMNS}
        FROM songs
        WHERE (?1 = '' OR group_name LIKE '%' || ?1 || '%')
          AND (?2 = '' OR song_name LIKE '%' || ?2 || '%')
          AND (?3 = '' OR release_date LIKE '%' || ?3 || '%')
        ORDER BY id
        LIMIT ?4 OFFSET ?5
        "#
    ))
    .bind(&filter.group)
    .bind(&filter.song)
    .bind(&filter.release_date)
    .bind(i64::from(filter.page_size))
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(songs)
}
