use std::{env, fmt::Display, str::FromStr};

use tracing::info;

/// Runtime configuration, sourced from the environment.
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub redis_host: String,
    pub redis_port: u16,
    /// Configured TTL for cached results. Carried for the cache client;
    /// no write path currently populates the cache, so it is never applied.
    pub cache_ttl: u64,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", "3030"),
            database_url: load_or("DATABASE_URL", "postgres://user:pass@db:5432/poll"),
            redis_host: load_or("REDIS_HOST", "redis"),
            redis_port: try_load("REDIS_PORT", "6379"),
            cache_ttl: try_load("CACHE_TTL", "86400"),
        }
    }

    pub fn redis_url(&self) -> String {
        format!("redis://{}:{}", self.redis_host, self.redis_port)
    }
}

fn load_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    let raw = load_or(key, default);
    match raw.parse() {
        Ok(value) => value,
        Err(e) => panic!("invalid {key} value {raw:?}: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_and_overrides() {
        env::remove_var("REDIS_HOST");
        env::remove_var("REDIS_PORT");
        env::remove_var("CACHE_TTL");
        let config = Config::load();
        assert_eq!(config.redis_host, "redis");
        assert_eq!(config.redis_port, 6379);
        assert_eq!(config.cache_ttl, 86400);
        assert_eq!(config.redis_url(), "redis://redis:6379");

        env::set_var("REDIS_HOST", "cache.internal");
        env::set_var("REDIS_PORT", "6380");
        let config = Config::load();
        assert_eq!(config.redis_url(), "redis://cache.internal:6380");
        env::remove_var("REDIS_HOST");
        env::remove_var("REDIS_PORT");
    }
}
