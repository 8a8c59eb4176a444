use std::fmt;

/// Telegram bot token. Opaque; only checked for presence.
#[derive(Clone, PartialEq, Eq)]
pub struct BotToken(pub String);

impl BotToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Never print the secret, even in debug output.
impl fmt::Debug for BotToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BotToken(<redacted>)")
    }
}

/// Destination chat id (numeric id or `@channel` name), passed through verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatId(pub String);

impl ChatId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Outcome of a completed HTTP exchange, whatever the status code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}
