use crate::flag::PowerState;

pub const MSG_POWER_ON: &str = "💡 Світло з'явилося! 🎉";
pub const MSG_POWER_OFF: &str = "🪫 Світло скінчилося! 😠 ⚡";

/// Hours are dropped when zero, minutes are always shown.
pub fn format_outage(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;

    let mut text = String::new();
    if hours > 0 {
        text.push_str(&format!("{} год ", hours));
    }
    text.push_str(&format!("{} хв", minutes));
    text
}

pub fn restored_message(outage_secs: u64) -> String {
    format!("{}\n⏱️ Світла не було {}", MSG_POWER_ON, format_outage(outage_secs))
}

pub fn message_for(state: PowerState, outage_secs: u64) -> String {
    match state {
        PowerState::Present => restored_message(outage_secs),
        PowerState::Absent => MSG_POWER_OFF.to_string(),
    }
}
