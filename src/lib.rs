//! Power outage notifier for ESP32.
//!
//! Watches a power-presence pin, keeps the last notified state in one byte of
//! NVS and posts a Telegram message on every change. The pure logic builds on
//! any host; the ESP-IDF adapters in [`esp`] only for `target_os = "espidf"`.

pub mod config;
pub mod flag;
pub mod message;
pub mod monitor;
pub mod ports;
pub mod runner;
pub mod telegram;

#[cfg(target_os = "espidf")]
pub mod esp;

#[cfg(test)]
mod testing;
