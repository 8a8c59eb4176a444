//! Core logic for the Telegram connectivity probe.
//!
//! The probe only talks to Telegram through the [`ports::TelegramTransport`]
//! trait; the HTTP implementation lives in the `tgprobe-telegram` adapter crate.

pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod ports;
pub mod probe;

pub use errors::{Error, Result};
