//! Telegram Bot API transport (reqwest).
//!
//! Implements the `tgprobe-core` [`TelegramTransport`] port with a plain HTTPS
//! client. Status codes are passed through untouched; only failures to get a
//! response at all become errors.

use std::time::Duration;

use async_trait::async_trait;

use tgprobe_core::{domain::HttpReply, errors::Error, ports::TelegramTransport, Result};

#[derive(Clone, Debug)]
pub struct HttpTelegramTransport {
    http: reqwest::Client,
}

impl HttpTelegramTransport {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("tgprobe/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Transport(format!("http client build failed: {e}")))?;
        Ok(Self { http })
    }

    /// The request URL carries the bot token, so it is stripped from the error.
    fn map_err(e: reqwest::Error) -> Error {
        let kind = if e.is_timeout() {
            "timed out"
        } else if e.is_connect() {
            "connection failed"
        } else {
            "request failed"
        };
        Error::Transport(format!("{kind}: {}", e.without_url()))
    }
}

#[async_trait]
impl TelegramTransport for HttpTelegramTransport {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
        timeout: Duration,
    ) -> Result<HttpReply> {
        let resp = self
            .http
            .post(url)
            .json(body)
            .timeout(timeout)
            .send()
            .await
            .map_err(Self::map_err)?;

        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(Self::map_err)?;
        tracing::debug!(status, "telegram responded");

        Ok(HttpReply { status, body })
    }
}
