use core::ptr;
use core::time::Duration;

use anyhow::Result;
use esp_idf_sys::{self as sys, esp};
use log::warn;

use crate::ports::Watchdog;

/// Task watchdog subscription for the calling task. If `feed` is not called
/// within the timeout the chip panics and restarts.
pub struct TaskWatchdog;

impl TaskWatchdog {
    pub fn init(timeout: Duration) -> Result<Self> {
        let config = sys::esp_task_wdt_config_t {
            timeout_ms: timeout.as_millis().clamp(1, u128::from(u32::MAX)) as u32,
            idle_core_mask: 0,
            trigger_panic: true,
        };

        unsafe {
            match esp!(sys::esp_task_wdt_init(&config)) {
                Ok(()) => {}
                // Already started by the ESP-IDF startup code.
                Err(e) if e.code() == sys::ESP_ERR_INVALID_STATE as sys::esp_err_t => {
                    esp!(sys::esp_task_wdt_reconfigure(&config))?;
                }
                Err(e) => return Err(e.into()),
            }
            esp!(sys::esp_task_wdt_add(ptr::null_mut()))?;
        }
        Ok(Self)
    }
}

impl Watchdog for TaskWatchdog {
    fn feed(&mut self) {
        if let Err(e) = unsafe { esp!(sys::esp_task_wdt_reset()) } {
            warn!("Failed to feed watchdog: {:?}", e);
        }
    }
}
