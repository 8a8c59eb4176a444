/// Core error type for the probe.
///
/// Every failure path ends up here; the binary decides the exit code from
/// whether `run` returned `Ok` or one of these.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("configuration incomplete: {} not set", missing.join(", "))]
    ConfigurationIncomplete { missing: Vec<&'static str> },

    #[error("telegram api returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
