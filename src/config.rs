use core::time::Duration;

mod build_config {
    include!(concat!(env!("OUT_DIR"), "/app_config.rs"));
}

pub use build_config::{BOT_TOKEN, TG_CHAT_ID, WIFI_PASS, WIFI_SSID};

// Power probe on GPIO26, up to 3.3V. Do not feed 5V directly.
pub const PROBE_PIN: u8 = 26;

pub const TICK_INTERVAL: Duration = Duration::from_millis(5000);
pub const LOOP_PERIOD_MS: u32 = 100;

pub const WATCHDOG_TIMEOUT: Duration = Duration::from_secs(60);

// Shorter timeouts drop Telegram's "ok" and the same message goes out twice.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(25);

/// Anything earlier means SNTP has not synchronized yet.
pub const MIN_VALID_UNIX_TIME: u64 = 24 * 3600;

pub const NVS_NAMESPACE: &str = "power";
pub const NVS_FLAG_KEY: &str = "flag";

pub fn is_time_valid(unix_secs: u64) -> bool {
    unix_secs >= MIN_VALID_UNIX_TIME
}
