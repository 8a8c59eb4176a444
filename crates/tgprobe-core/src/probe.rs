//! The connectivity probe: one configuration check, one `sendMessage` call.

use std::{io::Write, sync::Arc};

use serde::Serialize;
use tracing::{info, warn};

use crate::{
    config::{Config, BOT_TOKEN_VAR, CHAT_ID_VAR},
    domain::{BotToken, ChatId},
    errors::Error,
    ports::TelegramTransport,
    Result,
};

/// Fixed diagnostic text sent to the chat.
pub const TEST_MESSAGE: &str =
    "🔧 GitHub Actions Telegram test\n\n✅ If you received this message, the configuration is correct!";

pub const PARSE_MODE: &str = "Markdown";

/// A bot token and chat id that are both present and non-empty.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub bot_token: BotToken,
    pub chat_id: ChatId,
}

impl Credentials {
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let mut missing = Vec::new();
        if cfg.telegram_bot_token.is_none() {
            missing.push(BOT_TOKEN_VAR);
        }
        if cfg.telegram_chat_id.is_none() {
            missing.push(CHAT_ID_VAR);
        }

        match (&cfg.telegram_bot_token, &cfg.telegram_chat_id) {
            (Some(token), Some(chat)) => Ok(Self {
                bot_token: BotToken(token.clone()),
                chat_id: ChatId(chat.clone()),
            }),
            _ => Err(Error::ConfigurationIncomplete { missing }),
        }
    }
}

pub fn send_message_url(api_base: &str, token: &BotToken) -> String {
    format!("{api_base}/bot{}/sendMessage", token.as_str())
}

/// JSON body of a `sendMessage` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SendMessage<'a> {
    pub chat_id: &'a str,
    pub text: &'a str,
    pub parse_mode: &'a str,
}

pub fn send_message_payload(chat_id: &ChatId) -> SendMessage<'_> {
    SendMessage {
        chat_id: chat_id.as_str(),
        text: TEST_MESSAGE,
        parse_mode: PARSE_MODE,
    }
}

/// HTTP client errors usually embed the request URL, which carries the token.
fn redact(text: &str, token: &BotToken) -> String {
    if token.as_str().is_empty() {
        return text.to_string();
    }
    text.replace(token.as_str(), "<redacted>")
}

fn presence(set: bool) -> &'static str {
    if set {
        "set"
    } else {
        "not set"
    }
}

pub struct ConnectivityProbe {
    transport: Arc<dyn TelegramTransport>,
    cfg: Config,
}

impl ConnectivityProbe {
    pub fn new(transport: Arc<dyn TelegramTransport>, cfg: Config) -> Self {
        Self { transport, cfg }
    }

    /// Run the probe once, writing the report to `out`.
    ///
    /// `Ok(())` means Telegram answered 200. Every failure is reported to `out`
    /// before it is returned; nothing is retried.
    pub async fn run(&self, out: &mut (dyn Write + Send)) -> Result<()> {
        let cfg = &self.cfg;
        writeln!(out, "🔧 Telegram configuration test")?;
        writeln!(
            out,
            "Bot token: {}",
            presence(cfg.telegram_bot_token.is_some())
        )?;
        writeln!(out, "Chat id: {}", presence(cfg.telegram_chat_id.is_some()))?;

        let creds = match Credentials::from_config(cfg) {
            Ok(c) => c,
            Err(e) => {
                if let Error::ConfigurationIncomplete { missing } = &e {
                    for var in missing {
                        writeln!(out, "❌ {var} is not set")?;
                    }
                }
                warn!("{e}");
                return Err(e);
            }
        };

        let url = send_message_url(&cfg.api_base, &creds.bot_token);
        let body = serde_json::to_value(send_message_payload(&creds.chat_id))?;

        writeln!(out, "🔄 Sending test message to Telegram...")?;
        info!(chat_id = %creds.chat_id.as_str(), "sending probe message");

        match self.transport.post_json(&url, &body, cfg.request_timeout).await {
            Ok(reply) if reply.is_ok() => {
                writeln!(out, "✅ Telegram connectivity test succeeded!")?;
                info!("telegram accepted probe message");
                Ok(())
            }
            Ok(reply) => {
                writeln!(out, "❌ Telegram API returned an error: {}", reply.status)?;
                writeln!(out, "Error detail: {}", reply.body)?;
                warn!(status = reply.status, "telegram rejected probe message");
                Err(Error::Api {
                    status: reply.status,
                    body: reply.body,
                })
            }
            Err(e) => {
                let reason = match e {
                    Error::Transport(msg) => msg,
                    other => other.to_string(),
                };
                let reason = redact(&reason, &creds.bot_token);
                writeln!(out, "❌ Connection error: {reason}")?;
                warn!("probe request failed: {reason}");
                Err(Error::Transport(reason))
            }
        }
    }
}
