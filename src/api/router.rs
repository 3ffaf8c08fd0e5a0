//! Route table for the song catalog API.
//!
//! All song routes are nested under `/api/v1/songs`; `/health` sits at
//! the root for deployment probes.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use super::handlers::{self, AppState};
use crate::metadata::SongInfoApi;
use crate::service::SongService;

/// Build the application router over the given service.
pub fn router<M: SongInfoApi + 'static>(service: Arc<SongService<M>>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api/v1/songs", songs_router::<M>())
        .with_state(service)
}

fn songs_router<M: SongInfoApi + 'static>() -> Router<AppState<M>> {
    Router::new()
        .route(
            "/",
            post(handlers::create_song::<M>).get(handlers::list_songs::<M>),
        )
        .route(
            "/{id}",
            get(handlers::get_song::<M>)
                .put(handlers::update_song::<M>)
                .delete(handlers::delete_song::<M>),
        )
        .route("/{id}/verses", get(handlers::song_verses::<M>))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::db;
    use crate::metadata::MetadataError;
    use crate::metadata::traits::mocks::MockSongInfo;

    async fn test_app(mock: MockSongInfo) -> (tempfile::TempDir, Router) {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite:{}", db_path.display());
        let pool = db::init_db(&db_url).await.expect("Failed to init db");
        let service = Arc::new(SongService::new(pool, mock));
        (temp_dir, router(service))
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (_dir, app) = test_app(MockSongInfo::with_info("", "", "")).await;

        let response = app.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_create_song_returns_enriched_body() {
        let mock = MockSongInfo::with_info("2006-07-16", "v1\n\nv2", "http://x");
        let (_dir, app) = test_app(mock).await;

        let request = json_request(
            "POST",
            "/api/v1/songs",
            serde_json::json!({"group": "Muse", "song": "Supermassive Black Hole"}),
        );
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert!(body["id"].as_i64().unwrap() > 0);
        assert_eq!(body["group"], "Muse");
        assert_eq!(body["releaseDate"], "2006-07-16");
        assert_eq!(body["text"], "v1\n\nv2");
        assert_eq!(body["link"], "http://x");
    }

    #[tokio::test]
    async fn test_create_song_empty_group_is_400() {
        let (_dir, app) = test_app(MockSongInfo::with_info("", "", "")).await;

        let request = json_request(
            "POST",
            "/api/v1/songs",
            serde_json::json!({"group": "", "song": "Uprising"}),
        );
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("group"));
    }

    #[tokio::test]
    async fn test_create_song_upstream_failure_is_500() {
        let mock = MockSongInfo::with_error(MetadataError::Upstream { status: 502 });
        let (_dir, app) = test_app(mock).await;

        let request = json_request(
            "POST",
            "/api/v1/songs",
            serde_json::json!({"group": "Muse", "song": "Uprising"}),
        );
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_get_missing_song_is_404() {
        let (_dir, app) = test_app(MockSongInfo::with_info("", "", "")).await;

        let response = app.oneshot(get_request("/api/v1/songs/99")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("99"));
    }

    #[tokio::test]
    async fn test_crud_flow() {
        let mock = MockSongInfo::with_info("2006-07-16", "v1", "http://x");
        let (_dir, app) = test_app(mock).await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/songs",
                serde_json::json!({"group": "Muse", "song": "Uprising"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let id = body_json(response).await["id"].as_i64().unwrap();

        // Full overwrite, no enrichment on update
        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &format!("/api/v1/songs/{id}"),
                serde_json::json!({
                    "group": "Muse",
                    "song": "Uprising",
                    "releaseDate": "2009-09-07",
                    "text": "new text",
                    "link": "http://new"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["releaseDate"], "2009-09-07");

        let response = app
            .clone()
            .oneshot(get_request(&format!("/api/v1/songs/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["text"], "new text");

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/v1/songs/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(get_request(&format!("/api/v1/songs/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_with_group_filter() {
        let mock = MockSongInfo::with_info("2006-07-16", "v1", "http://x");
        let (_dir, app) = test_app(mock).await;

        for (group, song) in [("Muse", "Uprising"), ("Queen", "Bohemian Rhapsody")] {
            let response = app
                .clone()
                .oneshot(json_request(
                    "POST",
                    "/api/v1/songs",
                    serde_json::json!({"group": group, "song": song}),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        let response = app
            .clone()
            .oneshot(get_request("/api/v1/songs?group=muse"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["group"], "Muse");

        let response = app
            .oneshot(get_request("/api/v1/songs?page=0"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_song_verses_pagination() {
        let mock = MockSongInfo::with_info("2006-07-16", "v1\n\nv2", "http://x");
        let (_dir, app) = test_app(mock).await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/v1/songs",
                serde_json::json!({"group": "Muse", "song": "Supermassive Black Hole"}),
            ))
            .await
            .unwrap();
        let id = body_json(response).await["id"].as_i64().unwrap();

        let response = app
            .clone()
            .oneshot(get_request(&format!(
                "/api/v1/songs/{id}/verses?verse_page=1&verse_size=4"
            )))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["verses"], serde_json::json!(["v1", "v2"]));
        assert_eq!(body["total_verses"], 2);
        assert_eq!(body["current_page"], 1);
        assert_eq!(body["group"], "Muse");

        let response = app
            .oneshot(get_request(&format!(
                "/api/v1/songs/{id}/verses?verse_page=5"
            )))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
