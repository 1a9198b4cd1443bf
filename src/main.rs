#[cfg(target_os = "espidf")]
fn main() {
    esp_idf_sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    if let Err(e) = firmware::run() {
        log::error!("Fatal error: {:?}", e);
        loop {
            power_notifier::esp::delay_ms(1000);
        }
    }
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    eprintln!("power-notifier is ESP32 firmware; build it for an espidf target");
}

#[cfg(target_os = "espidf")]
mod firmware {
    use std::time::Instant;

    use anyhow::{Context, Result};
    use esp_idf_hal::gpio::PinDriver;
    use esp_idf_hal::peripherals::Peripherals;
    use esp_idf_svc::eventloop::EspSystemEventLoop;
    use esp_idf_svc::nvs::EspDefaultNvsPartition;
    use esp_idf_svc::wifi::{BlockingWifi, EspWifi};
    use log::{error, info};

    use power_notifier::config::{
        BOT_TOKEN, LOOP_PERIOD_MS, PROBE_PIN, TG_CHAT_ID, TICK_INTERVAL, WATCHDOG_TIMEOUT, WIFI_PASS,
        WIFI_SSID,
    };
    use power_notifier::esp::{
        connect_wifi, delay_ms, start_sntp, wait_for_time, NvsFlagStore, PinProbe, SystemClock,
        TaskWatchdog, TelegramNotifier, WifiLink,
    };
    use power_notifier::monitor::{init_flag, Monitor};
    use power_notifier::runner::Runner;

    pub fn run() -> Result<()> {
        info!("Starting power outage notifier");
        let peripherals = Peripherals::take().context("Failed to take peripherals")?;
        let sys_loop = EspSystemEventLoop::take()?;

        let probe = PinProbe::new(PinDriver::input(peripherals.pins.gpio26)?);
        info!("Power probe on GPIO{}", PROBE_PIN);

        info!("Init power flag storage:");
        let nvs = match EspDefaultNvsPartition::take() {
            Ok(nvs) => nvs,
            Err(e) => storage_failed(e.into()),
        };
        let mut store = match NvsFlagStore::new(nvs.clone()) {
            Ok(store) => store,
            Err(e) => storage_failed(e),
        };
        if let Err(e) = init_flag(&mut store) {
            storage_failed(e);
        }

        info!("Init watchdog:");
        let mut watchdog = TaskWatchdog::init(WATCHDOG_TIMEOUT)?;

        let mut wifi = BlockingWifi::wrap(
            EspWifi::new(peripherals.modem, sys_loop.clone(), Some(nvs))?,
            sys_loop,
        )?;
        connect_wifi(&mut wifi, WIFI_SSID, WIFI_PASS)?;
        let mut link = WifiLink::new(wifi);

        let notifier = TelegramNotifier::new(BOT_TOKEN, TG_CHAT_ID)?;

        info!("Retrieving time:");
        let _sntp = start_sntp()?;
        let clock = SystemClock;
        wait_for_time(&clock);

        let monitor = Monitor::new(store, notifier, clock, probe);
        let mut runner = Runner::new(monitor, TICK_INTERVAL, Instant::now());

        loop {
            runner.service(&mut link, &mut watchdog, Instant::now());
            delay_ms(LOOP_PERIOD_MS);
        }
    }

    /// Storage is unusable; report it every second until someone reflashes.
    fn storage_failed(e: anyhow::Error) -> ! {
        loop {
            error!("Power flag storage failed: {:?}", e);
            delay_ms(1000);
        }
    }
}
