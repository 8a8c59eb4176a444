use std::{io, process::ExitCode, sync::Arc};

use anyhow::Context;

use tgprobe_core::{config::Config, probe::ConnectivityProbe, Result};
use tgprobe_telegram::HttpTelegramTransport;

/// 0 when Telegram accepted the message, 1 for any failure.
fn exit_status(outcome: &Result<()>) -> u8 {
    match outcome {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    tgprobe_core::logging::init("tgprobe")?;

    let cfg = Config::load().context("failed to load configuration")?;
    let transport =
        Arc::new(HttpTelegramTransport::new().context("failed to build http client")?);
    let probe = ConnectivityProbe::new(transport, cfg);

    let mut stdout = io::stdout();
    let outcome = probe.run(&mut stdout).await;
    if let Err(e) = &outcome {
        tracing::debug!("probe failed: {e}");
    }

    Ok(ExitCode::from(exit_status(&outcome)))
}
