use anyhow::{anyhow, Result};
use serde_json::{json, Value};

const API_BASE: &str = "https://api.telegram.org";

pub fn send_message_url(bot_token: &str) -> String {
    format!("{}/bot{}/sendMessage", API_BASE, bot_token)
}

pub fn send_message_body(chat_id: &str, text: &str) -> String {
    json!({
        "chat_id": chat_id,
        "text": text
    })
    .to_string()
}

/// Telegram answers `{"ok":true,...}` once the message is accepted. Anything
/// else is a failed send, even with a 2xx status.
pub fn check_response(status: u16, body: &[u8]) -> Result<()> {
    let parsed: Option<Value> = serde_json::from_slice(body).ok();
    let ok = parsed
        .as_ref()
        .and_then(|v| v.get("ok"))
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if (200..300).contains(&status) && ok {
        return Ok(());
    }

    let description = parsed
        .as_ref()
        .and_then(|v| v.get("description"))
        .and_then(Value::as_str)
        .unwrap_or("no description");
    Err(anyhow!("Telegram rejected message, status {}: {}", status, description))
}
