use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use brandpulse_backend::controllers::{news::NewsController, watchlist::WatchlistController};
use brandpulse_backend::domain::news::{FeedFetcher, NewsService};
use brandpulse_backend::domain::sentiment::SentimentScorer;
use brandpulse_backend::domain::watchlist::WatchlistService;
use brandpulse_backend::infrastructure::config::{Config, LogFormat};
use brandpulse_backend::infrastructure::db::{check_connection, create_pool, run_migrations};
use brandpulse_backend::infrastructure::http::{build_router, start_http_server};
use brandpulse_backend::infrastructure::repositories::{GoogleNewsRepository, PgWatchlistRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        development = config.is_development(),
        "Starting BrandPulse Backend on {}:{}",
        config.host,
        config.port
    );

    // Create database connection pool
    let pool = create_pool(&config.database_url).await?;
    check_connection(&pool).await?;
    tracing::info!("Database connection verified");

    run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    let pool = Arc::new(pool);
    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Repositories
    let feed_source = Arc::new(GoogleNewsRepository::new(
        config.feed_url_template.clone(),
        Duration::from_secs(config.feed_timeout_secs),
    )?);
    let watchlist_repo = Arc::new(PgWatchlistRepository::new(pool.clone()));
    tracing::info!(
        feed_url_template = %config.feed_url_template,
        feed_result_limit = config.feed_result_limit,
        feed_timeout_secs = config.feed_timeout_secs,
        "News feed configured"
    );

    // 2. Services
    let scorer = Arc::new(SentimentScorer::new());
    let news_service = Arc::new(NewsService::new(
        FeedFetcher::new(feed_source),
        scorer,
        config.feed_result_limit,
    ));
    let watchlist_service = Arc::new(WatchlistService::new(watchlist_repo));

    // 3. Controllers
    let news_controller = Arc::new(NewsController::new(news_service));
    let watchlist_controller = Arc::new(WatchlistController::new(watchlist_service));

    tracing::info!(
        any_origin = config.allows_any_origin(),
        origins = ?config.cors_origins,
        "CORS configured"
    );

    let app = build_router(
        pool,
        news_controller,
        watchlist_controller,
        &config.cors_origins,
    );

    start_http_server(config, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "brandpulse_backend=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
