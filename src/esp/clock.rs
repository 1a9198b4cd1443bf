use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use esp_idf_svc::sntp::EspSntp;
use log::info;

use super::delay_ms;
use crate::config::is_time_valid;
use crate::ports::Clock;

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

/// UTC from the pool.ntp.org servers. The returned handle must stay alive
/// for sync to continue.
pub fn start_sntp() -> Result<EspSntp<'static>> {
    let sntp = EspSntp::new_default()?;
    info!("SNTP initialized, waiting for sync...");
    Ok(sntp)
}

/// Blocks until the wall clock has left the epoch. Returns the first valid
/// reading.
pub fn wait_for_time(clock: &impl Clock) -> u64 {
    let mut now = clock.now();
    while !is_time_valid(now) {
        delay_ms(100);
        now = clock.now();
    }
    info!("Time synchronized: {}", now);
    now
}
