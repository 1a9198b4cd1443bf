use anyhow::{anyhow, Result};
use esp_idf_svc::ipv4::IpInfo;
use esp_idf_svc::wifi::{AuthMethod, BlockingWifi, ClientConfiguration, Configuration, EspWifi};
use log::{info, warn};

use super::delay_ms;
use crate::ports::Connectivity;

pub fn connect_wifi(wifi: &mut BlockingWifi<EspWifi<'static>>, ssid: &str, password: &str) -> Result<()> {
    let wifi_config = Configuration::Client(ClientConfiguration {
        ssid: heapless::String::try_from(ssid).map_err(|_| anyhow!("SSID '{}' is too long", ssid))?,
        password: heapless::String::try_from(password).map_err(|_| anyhow!("WiFi password is too long"))?,
        auth_method: if password.is_empty() {
            AuthMethod::None
        } else {
            AuthMethod::WPA2Personal
        },
        ..Default::default()
    });
    wifi.set_configuration(&wifi_config)?;
    wifi.start()?;
    info!("Connecting to WiFi SSID {}", ssid);
    while let Err(e) = wifi.connect() {
        warn!("WiFi connect failed: {:?}, retrying...", e);
        delay_ms(500);
    }
    wifi.wait_netif_up()?;
    let ip_info: IpInfo = wifi.wifi().sta_netif().get_ip_info()?;
    info!("WiFi connected. IP address: {}", ip_info.ip);
    Ok(())
}

pub struct WifiLink {
    wifi: BlockingWifi<EspWifi<'static>>,
}

impl WifiLink {
    pub fn new(wifi: BlockingWifi<EspWifi<'static>>) -> Self {
        Self { wifi }
    }
}

impl Connectivity for WifiLink {
    fn is_connected(&self) -> bool {
        self.wifi.is_connected().unwrap_or(false)
    }

    fn reconnect(&mut self) -> Result<()> {
        self.wifi.connect()?;
        self.wifi.wait_netif_up()?;
        if let Ok(info) = self.wifi.wifi().sta_netif().get_ip_info() {
            info!("WiFi IP address: {}", info.ip);
        }
        Ok(())
    }
}
