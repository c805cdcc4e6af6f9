use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::adapters::PagePodcastSource;
use crate::error::ConfigError;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// Base URL of the platform serving `/stories/feed` and `/billboards/:slot`
    pub upstream_url: String,
    pub fetch_timeout: Duration,
    /// File holding the followed-podcast episode JSON
    pub podcast_episodes_path: Option<PathBuf>,
    /// Inline episode JSON, used when no path is set
    pub podcast_episodes_json: Option<String>,
    /// Rate limit for feed requests, per client IP
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            port: parse_or(&lookup, "PORT", 8080)?,
            upstream_url: lookup("FEED_UPSTREAM_URL")
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
            fetch_timeout: Duration::from_secs(parse_or(&lookup, "FEED_FETCH_TIMEOUT_SECS", 10)?),
            podcast_episodes_path: lookup("PODCAST_EPISODES_PATH").map(PathBuf::from),
            podcast_episodes_json: lookup("PODCAST_EPISODES_JSON"),
            rate_limit_per_second: parse_or(&lookup, "FEED_RATE_LIMIT_PER_SECOND", 10)?,
            rate_limit_burst: parse_or(&lookup, "FEED_RATE_LIMIT_BURST", 20)?,
        })
    }

    /// Load the podcast page state named by the configuration
    pub fn podcast_source(&self) -> Result<PagePodcastSource, ConfigError> {
        match (&self.podcast_episodes_path, &self.podcast_episodes_json) {
            (Some(path), _) => PagePodcastSource::from_path(path),
            (None, Some(json)) => PagePodcastSource::from_json(json),
            (None, None) => Ok(PagePodcastSource::empty()),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}
