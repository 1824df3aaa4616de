//! Runtime configuration, read once at startup.
//!
//! Values come from the process environment after `.env.local` has been
//! loaded. Every variable is optional; defaults reproduce the original
//! deployment (one comic on port 8080).

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, TimeZone, Utc};

use super::feed::types::FeedConfig;
use super::upstream::fetcher::DEFAULT_BASE_URL;

pub const LISTEN_ADDR_KEY: &str = "FEEDS_LISTEN_ADDR";
pub const UPSTREAM_BASE_URL_KEY: &str = "FEEDS_UPSTREAM_BASE_URL";
pub const UPSTREAM_TIMEOUT_KEY: &str = "FEEDS_UPSTREAM_TIMEOUT_SECS";
pub const FAILURE_POLICY_KEY: &str = "FEEDS_FAILURE_POLICY";

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 20;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// How a handler answers when the feed cannot be produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// 502 for upstream failures, 500 for serialization failures.
    #[default]
    Strict,
    /// 200 with an empty feed, so feed readers keep polling through outages.
    Silent,
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "silent" => Ok(Self::Silent),
            other => Err(format!("expected strict or silent, got {other}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,
    pub upstream_base_url: String,
    pub upstream_timeout: Duration,
    pub failure_policy: FailurePolicy,
    pub comics: Vec<FeedConfig>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let listen_addr = read(LISTEN_ADDR_KEY).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr: SocketAddr = parse_value(LISTEN_ADDR_KEY, listen_addr)?;

        let upstream_base_url =
            read(UPSTREAM_BASE_URL_KEY).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let upstream_timeout = match read(UPSTREAM_TIMEOUT_KEY) {
            Some(raw) => Duration::from_secs(parse_value::<u64>(UPSTREAM_TIMEOUT_KEY, raw)?),
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let failure_policy = match read(FAILURE_POLICY_KEY) {
            Some(raw) => parse_value(FAILURE_POLICY_KEY, raw)?,
            None => FailurePolicy::default(),
        };

        Ok(Self {
            listen_addr,
            upstream_base_url,
            upstream_timeout,
            failure_policy,
            comics: default_comics(),
        })
    }
}

fn parse_value<T>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    value.trim().parse::<T>().map_err(|error| ConfigError::Invalid {
        key,
        value,
        reason: error.to_string(),
    })
}

/// The comics this deployment serves.
pub fn default_comics() -> Vec<FeedConfig> {
    let created: DateTime<FixedOffset> = Utc
        .with_ymd_and_hms(2020, 11, 11, 12, 0, 0)
        .single()
        .unwrap_or_default()
        .into();

    vec![FeedConfig {
        title_id: "yabai".to_string(),
        title: "僕の心のヤバイやつ".to_string(),
        link: "https://feeds.kuminecraft.xyz".to_string(),
        description: "「僕の心のヤバイやつ」の非公式RSSリーダーです".to_string(),
        created,
    }]
}
