use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Static figure shown in the game header; not tracked anywhere.
    pub online_users: u32,
    /// One tick per real second is the game's contract. Override only for demos.
    pub tick_millis: u64,
    pub log_level: String,
    pub http_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            online_users: 23,
            tick_millis: 1000,
            log_level: "info".to_string(),
            http_port: 3000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            online_users: parse_env("ONLINE_USERS", "23")?,
            tick_millis: parse_env("TICK_MILLIS", "1000")?,
            log_level: env_or("LOG_LEVEL", "info"),
            http_port: parse_env("HTTP_PORT", "3000")?,
        })
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis.max(1))
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = env_or(key, default);
    raw.trim()
        .parse()
        .with_context(|| format!("invalid value for {key}: {raw}"))
}
