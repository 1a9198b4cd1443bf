//! Capabilities the monitor needs from the outside world.
//!
//! The ESP-IDF implementations live in `crate::esp`; tests use the fakes in
//! `crate::testing`.

use anyhow::Result;

/// One byte of non-volatile storage.
pub trait FlagStore {
    /// `Ok(None)` when nothing was ever written.
    fn read(&mut self) -> Result<Option<u8>>;
    fn write(&mut self, flag: u8) -> Result<()>;
}

/// Outbound chat message. `Ok` only once the service accepted it.
pub trait Notifier {
    fn send(&mut self, text: &str) -> Result<()>;
}

/// Wall clock in Unix seconds.
pub trait Clock {
    fn now(&self) -> u64;
}

pub trait PowerProbe {
    fn power_present(&mut self) -> bool;
}

pub trait Connectivity {
    fn is_connected(&self) -> bool;
    fn reconnect(&mut self) -> Result<()>;
}

pub trait Watchdog {
    fn feed(&mut self);
}
