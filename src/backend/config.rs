#![cfg(feature = "server")]
use anyhow::{anyhow, bail, Context, Result};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:3333";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Backend REST API base, without trailing slash.
    pub api_url: String,
    pub api_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup("COPA_API_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        if !(raw_url.starts_with("http://") || raw_url.starts_with("https://")) {
            bail!("COPA_API_URL must start with http:// or https://, got {raw_url:?}");
        }
        let api_url = raw_url.trim_end_matches('/').to_string();

        let api_timeout = match lookup("COPA_API_TIMEOUT_SECS") {
            Some(s) if !s.trim().is_empty() => {
                let secs: u64 = s
                    .trim()
                    .parse()
                    .with_context(|| format!("COPA_API_TIMEOUT_SECS is not a number: {s:?}"))?;
                if secs == 0 {
                    return Err(anyhow!("COPA_API_TIMEOUT_SECS must be positive"));
                }
                Some(Duration::from_secs(secs))
            }
            _ => None,
        };

        Ok(Self {
            api_url,
            api_timeout,
        })
    }
}
