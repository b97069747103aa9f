use serde::Deserialize;
use std::env;

use crate::domain::news::DEFAULT_FEED_LIMIT;

pub const DEFAULT_FEED_URL_TEMPLATE: &str =
    "https://news.google.com/rss/search?q={keyword}&hl=en-US&gl=US&ceid=US:en";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // News feed
    pub feed_url_template: String,
    pub feed_result_limit: usize,
    pub feed_timeout_secs: u64,
    // CORS
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            database_url: env::var("DATABASE_URL")?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: match env::var("ENVIRONMENT").as_deref() {
                Ok("production") => Environment::Production,
                _ => Environment::Development,
            },
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            feed_url_template: env::var("FEED_URL_TEMPLATE")
                .unwrap_or_else(|_| DEFAULT_FEED_URL_TEMPLATE.to_string()),
            feed_result_limit: env::var("FEED_RESULT_LIMIT")
                .unwrap_or_else(|_| DEFAULT_FEED_LIMIT.to_string())
                .parse()?,
            feed_timeout_secs: env::var("FEED_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()?,
            cors_origins: parse_origins(
                &env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()),
            ),
        };

        if !config.feed_url_template.contains("{keyword}") {
            return Err("FEED_URL_TEMPLATE must contain a {keyword} placeholder".into());
        }

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}
