//! ESP-IDF implementations of the capabilities in `crate::ports`.

mod clock;
mod nvs;
mod probe;
mod telegram;
mod watchdog;
mod wifi;

pub use clock::{start_sntp, wait_for_time, SystemClock};
pub use nvs::NvsFlagStore;
pub use probe::PinProbe;
pub use telegram::TelegramNotifier;
pub use watchdog::TaskWatchdog;
pub use wifi::{connect_wifi, WifiLink};

use esp_idf_sys::configTICK_RATE_HZ;

#[inline(always)]
pub fn ms_to_ticks(ms: u32) -> u32 {
    (ms as u64 * configTICK_RATE_HZ as u64 / 1000) as u32
}

pub fn delay_ms(ms: u32) {
    unsafe { esp_idf_sys::vTaskDelay(ms_to_ticks(ms)) };
}
