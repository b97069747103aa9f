pub mod google_news_repository;
pub mod watchlist_repository;

pub use google_news_repository::GoogleNewsRepository;
pub use watchlist_repository::PgWatchlistRepository;
