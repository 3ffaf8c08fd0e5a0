//! Trait definition for the song info API client.
//!
//! This trait enables dependency injection and mocking for tests.
//! Production code uses [`MetadataClient`](super::MetadataClient), while
//! tests substitute a mock implementation.

use async_trait::async_trait;

use super::{MetadataError, SongInfo};

/// Trait for external song metadata lookup.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait SongInfoApi: Send + Sync {
    /// Fetch release date, lyrics, and link for a (group, song) pair.
    async fn get_song_info(&self, group: &str, song: &str) -> Result<SongInfo, MetadataError>;
}

#[async_trait]
impl SongInfoApi for super::client::MetadataClient {
    async fn get_song_info(&self, group: &str, song: &str) -> Result<SongInfo, MetadataError> {
        self.get_song_info(group, song).await
    }
}

/// Mock song info client for testing.
#[cfg(test)]
pub mod mocks {
    use super::*;

    /// Mock client that returns a predefined result.
    pub struct MockSongInfo {
        /// Info to return from lookups
        pub info: Option<SongInfo>,
        /// Error to return (takes precedence over info)
        pub error: Option<MetadataError>,
    }

    impl MockSongInfo {
        /// Create a mock that returns the given details.
        pub fn with_info(release_date: &str, text: &str, link: &str) -> Self {
            Self {
                info: Some(SongInfo {
                    release_date: release_date.to_string(),
                    text: text.to_string(),
                    link: link.to_string(),
                }),
                error: None,
            }
        }

        /// Create a mock that returns an error.
        pub fn with_error(error: MetadataError) -> Self {
            Self {
                info: None,
                error: Some(error),
            }
        }
    }

    #[async_trait]
    impl SongInfoApi for MockSongInfo {
        async fn get_song_info(
            &self,
            _group: &str,
            _song: &str,
        ) -> Result<SongInfo, MetadataError> {
            if let Some(ref err) = self.error {
                return Err(err.clone());
            }
            self.info
                .clone()
                .ok_or(MetadataError::Upstream { status: 404 })
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_mock_returns_info() {
            let mock = MockSongInfo::with_info("2006-07-16", "v1\n\nv2", "http://x");
            let info = mock.get_song_info("Muse", "Supermassive").await.unwrap();
            assert_eq!(info.release_date, "2006-07-16");
            assert_eq!(info.text, "v1\n\nv2");
        }

        #[tokio::test]
        async fn test_mock_returns_error() {
            let mock = MockSongInfo::with_error(MetadataError::Network("timeout".to_string()));
            let result = mock.get_song_info("Muse", "Supermassive").await;
            assert!(matches!(result, Err(MetadataError::Network(_))));
        }
    }
}
