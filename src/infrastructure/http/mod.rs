pub mod request_id;

use axum::{
    http::HeaderValue,
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::controllers::{health, news::NewsController, watchlist::WatchlistController};
use crate::infrastructure::config::Config;
use crate::infrastructure::db::DbPool;

pub use request_id::{request_id_middleware, RequestId, X_REQUEST_ID};

/// Build the application router with all routes and layers
pub fn build_router(
    pool: Arc<DbPool>,
    news_controller: Arc<NewsController>,
    watchlist_controller: Arc<WatchlistController>,
    cors_origins: &[String],
) -> Router {
    let news_routes = Router::new()
        .route("/api/news/search", post(NewsController::search))
        .route(
            "/api/news/analyze-sentiment",
            post(NewsController::analyze_sentiment),
        )
        .with_state(news_controller);

    let watchlist_routes = Router::new()
        .route("/api/watchlist", get(WatchlistController::list))
        .route("/api/watchlist/save", post(WatchlistController::save))
        .route("/api/watchlist/:articleId", delete(WatchlistController::remove))
        .with_state(watchlist_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(pool)
        .route("/api/", get(health::api_root))
        .merge(news_routes)
        .merge(watchlist_routes)
        .layer(cors_layer(cors_origins))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// CORS for the configured origins. `*` allows any origin without credentials;
/// an explicit list allows credentials and mirrors requested methods/headers.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Bind and serve the router until the process is stopped
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
