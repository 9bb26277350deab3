use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod error;
pub mod handlers;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/news/search", get(handlers::search_news))
        .route("/api/news/newsGroupByInterval", get(handlers::group_news))
        .route("/api/news/toggle-mode", post(handlers::toggle_mode))
        .route("/api/news/mode", get(handlers::current_mode))
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Serve the API on `addr` until ctrl-c.
pub async fn serve(addr: SocketAddr, state: AppState) -> nt_core::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🌐 Listening on {}", listener.local_addr()?);
    axum::serve(listener, create_app(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down");
        })
        .await?;
    Ok(())
}

pub mod prelude {
    pub use nt_core::{Article, Result, Error};
    pub use crate::{create_app, serve, AppState};
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use nt_core::{Mode, NewsSource, SearchResult};
    use nt_fetch::ExampleArticles;
    use nt_search::{ModeSwitch, NewsManager};
    use nt_storage::InMemoryCache;
    use serde_json::Value;
    use tower::ServiceExt;

    struct DownSource;

    #[async_trait]
    impl NewsSource for DownSource {
        fn name(&self) -> &str {
            "down"
        }

        async fn fetch(&self, _keyword: &str) -> nt_core::Result<SearchResult> {
            Err(nt_core::Error::Fetch("provider unreachable".to_string()))
        }
    }

    /// Fails with an error the pipeline does not recover from.
    struct BrokenSource;

    #[async_trait]
    impl NewsSource for BrokenSource {
        fn name(&self) -> &str {
            "broken"
        }

        async fn fetch(&self, _keyword: &str) -> nt_core::Result<SearchResult> {
            Err(nt_core::Error::Storage("internal detail".to_string()))
        }
    }

    fn app_with(source: Arc<dyn NewsSource>, mode: Mode) -> Router {
        let manager = NewsManager::new(
            source,
            Arc::new(InMemoryCache::new()),
            Arc::new(ExampleArticles::new()),
            Arc::new(ModeSwitch::new(mode)),
        );
        create_app(AppState::new(Arc::new(manager)))
    }

    fn app(mode: Mode) -> Router {
        app_with(Arc::new(DownSource), mode)
    }

    async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, Vec<u8>) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn get_uri(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        send(app, "GET", uri).await
    }

    #[tokio::test]
    async fn test_search_offline() {
        let (status, body) = get_uri(app(Mode::Offline), "/api/news/search?keyword=apple").await;
        assert_eq!(status, StatusCode::OK);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["totalResults"], 3);
        assert_eq!(json["articles"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_invalid_keyword_is_bad_request() {
        let (status, body) = get_uri(app(Mode::Offline), "/api/news/search?keyword=invalid!").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], 400);
        assert_eq!(json["error"], "Invalid Keyword");
        assert_eq!(json["path"], "/api/news/search");
        assert_eq!(
            json["message"],
            "Keyword must only contain letters and numbers and cannot be null."
        );
    }

    #[tokio::test]
    async fn test_missing_keyword_is_bad_request() {
        let (status, _) = get_uri(app(Mode::Offline), "/api/news/search").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_no_matches_is_no_content() {
        let (status, body) = get_uri(app(Mode::Offline), "/api/news/search?keyword=zzzqqq").await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_provider_down_with_empty_cache_is_no_content() {
        let (status, _) = get_uri(app(Mode::Online), "/api/news/search?keyword=apple").await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_unexpected_search_error_hides_detail() {
        let app = app_with(Arc::new(BrokenSource), Mode::Online);
        let (status, body) = get_uri(app, "/api/news/search?keyword=apple").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Internal Server Error");
        assert_eq!(json["message"], "An unexpected error occurred.");
        assert!(!String::from_utf8(body).unwrap().contains("internal detail"));
    }

    #[tokio::test]
    async fn test_unexpected_grouping_error_has_its_own_message() {
        let app = app_with(Arc::new(BrokenSource), Mode::Online);
        let (status, body) = get_uri(app, "/api/news/newsGroupByInterval?keyword=apple").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json["message"],
            "An unexpected error occurred while grouping news articles."
        );
        assert_eq!(json["path"], "/api/news/newsGroupByInterval");
    }

    #[tokio::test]
    async fn test_grouped_search() {
        let (status, body) = get_uri(
            app(Mode::Offline),
            "/api/news/newsGroupByInterval?keyword=apple&interval=100&unit=years",
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["100 years ago"]["count"], 3);
        assert_eq!(json["100 years ago"]["articles"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_grouped_search_rejects_zero_interval() {
        let (status, body) = get_uri(
            app(Mode::Offline),
            "/api/news/newsGroupByInterval?keyword=apple&interval=0",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Invalid Input");
    }

    #[tokio::test]
    async fn test_toggle_mode_round_trip() {
        let app = app(Mode::Online);

        let (status, body) = send(app.clone(), "POST", "/api/news/toggle-mode?mode=OFFLINE").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(String::from_utf8(body).unwrap(), "Mode successfully set to: offline");

        let (_, body) = get_uri(app.clone(), "/api/news/mode").await;
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["mode"], "offline");

        let (status, _) = get_uri(app, "/api/news/search?keyword=apple").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_toggle_mode_rejects_unknown() {
        let app = app(Mode::Online);
        let (status, body) = send(app.clone(), "POST", "/api/news/toggle-mode?mode=sideways").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Invalid Input");
        assert_eq!(json["message"], "Invalid mode. Use 'online' or 'offline'.");

        let (status, _) = send(app.clone(), "POST", "/api/news/toggle-mode?mode=%20offline").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = get_uri(app, "/api/news/mode").await;
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["mode"], "online");
    }
}
