use std::time::Duration;

use async_trait::async_trait;

use crate::{domain::HttpReply, Result};

/// Outbound HTTP port used by the probe.
///
/// Implementations return `Ok` for any completed exchange (including non-2xx
/// statuses) and `Err(Error::Transport)` only when no response was received.
#[async_trait]
pub trait TelegramTransport: Send + Sync {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
        timeout: Duration,
    ) -> Result<HttpReply>;
}
