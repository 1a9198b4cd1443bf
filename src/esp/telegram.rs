use anyhow::{anyhow, Result};
use embedded_svc::http::client::Client as HttpClient;
use embedded_svc::http::Method;
use embedded_svc::io::{Read, Write};
use esp_idf_svc::http::client::{Configuration as HttpConfiguration, EspHttpConnection};
use log::info;

use crate::config::HTTP_TIMEOUT;
use crate::ports::Notifier;
use crate::telegram::{check_response, send_message_body, send_message_url};

pub struct TelegramNotifier {
    http: HttpClient<EspHttpConnection>,
    url: String,
    chat_id: String,
}

impl TelegramNotifier {
    /// TLS to api.telegram.org is verified against the ESP-IDF certificate
    /// bundle.
    pub fn new(bot_token: &str, chat_id: &str) -> Result<Self> {
        let http_config = HttpConfiguration {
            timeout: Some(HTTP_TIMEOUT),
            crt_bundle_attach: Some(esp_idf_sys::esp_crt_bundle_attach),
            ..Default::default()
        };
        let http = HttpClient::wrap(EspHttpConnection::new(&http_config)?);
        Ok(Self {
            http,
            url: send_message_url(bot_token),
            chat_id: chat_id.to_string(),
        })
    }
}

impl Notifier for TelegramNotifier {
    fn send(&mut self, text: &str) -> Result<()> {
        let body = send_message_body(&self.chat_id, text);
        let content_length = body.len().to_string();
        let headers = [
            ("Content-Type", "application/json"),
            ("Content-Length", content_length.as_str()),
        ];

        let mut request = self.http.request(Method::Post, &self.url, &headers)?;
        request.write_all(body.as_bytes())?;
        request.flush()?;
        let mut response = request.submit()?;
        let status = response.status();

        let mut reply = Vec::new();
        let mut buffer = [0_u8; 512];
        loop {
            match response.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => reply.extend_from_slice(&buffer[..n]),
                Err(e) => return Err(anyhow!("http read error: {:?}", e)),
            }
        }

        info!("TG < {} {}", status, String::from_utf8_lossy(&reply));
        check_response(status, &reply)
    }
}
