#![cfg(feature = "server")]
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use dioxus::logger::tracing::{debug, warn};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use std::error::Error as _;

use crate::backend::config::Config;
use crate::shared::types::{CountResponse, CreatePoolRequest, CreatedPool};

/// Resources the backend exposes a `/count` endpoint for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    Polls,
    Guesses,
    Users,
}

impl Counter {
    pub fn path(self) -> &'static str {
        match self {
            Counter::Polls => "/polls/count",
            Counter::Guesses => "/guesses/count",
            Counter::Users => "/users/count",
        }
    }
}

/// The subset of the NLW Copa REST API the web app talks to.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CopaBackend: Send + Sync {
    async fn count(&self, counter: Counter) -> Result<u64>;

    /// Creates a pool and returns its invite code.
    async fn create_pool(&self, title: &str) -> Result<String>;
}

#[derive(Debug, Clone)]
pub struct CopaApi {
    client: Client,
    base_url: String,
}

impl CopaApi {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.api_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("building HTTP client")?;
        Ok(Self {
            client,
            base_url: config.api_url.clone(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        method: Method,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let url = self.url(path);
        let method_s = method.as_str().to_string();
        debug!("[copa_api] {} {}", method_s, url);
        let mut req = self
            .client
            .request(method, &url)
            .header("Accept", "application/json");
        if let Some(b) = body {
            req = req.json(&b);
        }
        let res = match req.send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("[copa_api] request error on {} {}: {}", method_s, url, e);
                if e.is_timeout() {
                    warn!("[copa_api] hint: request timed out (COPA_API_TIMEOUT_SECS)");
                }
                if e.is_connect() {
                    warn!("[copa_api] hint: connection failed, check COPA_API_URL and that the API is running");
                }
                let mut chain = Vec::new();
                let mut src: Option<&dyn std::error::Error> = e.source();
                while let Some(s) = src {
                    chain.push(s.to_string());
                    src = s.source();
                }
                if !chain.is_empty() {
                    warn!("[copa_api] error chain: {}", chain.join(" -> "));
                }
                return Err(anyhow!("sending {} {}: {}", method_s, url, e));
            }
        };
        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            warn!(
                "[copa_api] request failed: status={} body={}",
                status,
                snippet(text.as_bytes())
            );
            return Err(anyhow!(
                "{} {} failed with status {}",
                method_s,
                url,
                status
            ));
        }
        let bytes = res
            .bytes()
            .await
            .with_context(|| format!("reading body from {} {}", method_s, url))?;
        decode(&bytes).with_context(|| format!("decoding JSON from {} {}", method_s, url))
    }
}

#[async_trait]
impl CopaBackend for CopaApi {
    async fn count(&self, counter: Counter) -> Result<u64> {
        let res: CountResponse = self.fetch(counter.path(), Method::GET, None).await?;
        Ok(res.count)
    }

    async fn create_pool(&self, title: &str) -> Result<String> {
        let body = serde_json::to_value(CreatePoolRequest {
            title: title.to_string(),
        })?;
        let created: CreatedPool = self.fetch("/polls", Method::POST, Some(body)).await?;
        Ok(created.code)
    }
}

fn snippet(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).chars().take(300).collect()
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|e| anyhow!("{}\nBody snippet: {}", e, snippet(bytes)))
}
