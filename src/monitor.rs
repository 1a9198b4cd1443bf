use anyhow::{Context, Result};
use log::{error, info, warn};

use crate::flag::PowerState;
use crate::message;
use crate::ports::{Clock, Connectivity, FlagStore, Notifier, PowerProbe};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Wi-Fi is down, nothing was sampled.
    Offline,
    /// Storage holds a value outside the flag domain. Latched until reboot.
    Faulted,
    /// Storage could not be read this tick.
    StoreUnreadable,
    /// Stored and live state agree.
    Steady(PowerState),
    /// The message for this state went out and the flag was written.
    Notified(PowerState),
    /// The message could not be sent; the flag is left stale so the next
    /// tick tries again.
    SendFailed(PowerState),
    /// The message went out but the flag write failed.
    PersistFailed(PowerState),
}

/// Reads the flag once at boot and writes POWER_PRESENT when it is missing
/// (first boot ever) or invalid. Errors here mean the storage itself is
/// unusable.
pub fn init_flag<S: FlagStore>(store: &mut S) -> Result<PowerState> {
    let stored = store.read().context("Failed to read power flag")?;
    info!("Stored power flag: {:?}", stored);

    if let Some(state) = stored.and_then(PowerState::from_flag) {
        info!("Power flag is valid, last notified state: {}", state);
        if state == PowerState::Absent {
            warn!("Booted during an outage, its start time is unknown; counting from boot");
        }
        return Ok(state);
    }

    store
        .write(PowerState::Present.flag())
        .context("Failed to initialize power flag")?;
    let reread = store.read().context("Failed to read back power flag")?;
    info!("Power flag initialized: {:?}", reread);
    Ok(PowerState::Present)
}

/// Transition detector. Owns every capability it touches so a tick needs no
/// global state.
pub struct Monitor<S, N, C, P> {
    store: S,
    notifier: N,
    clock: C,
    probe: P,
    booted_at: u64,
    outage_started_at: Option<u64>,
    fault: Option<u8>,
}

impl<S, N, C, P> Monitor<S, N, C, P>
where
    S: FlagStore,
    N: Notifier,
    C: Clock,
    P: PowerProbe,
{
    /// Boot-time flag check followed by [`Monitor::new`].
    #[cfg(test)]
    pub fn start(mut store: S, notifier: N, clock: C, probe: P) -> Result<Self> {
        init_flag(&mut store)?;
        Ok(Self::new(store, notifier, clock, probe))
    }

    /// Expects a flag already checked by [`init_flag`]. The clock must be
    /// synchronized: its current reading becomes the boot time.
    pub fn new(store: S, notifier: N, clock: C, probe: P) -> Self {
        let booted_at = clock.now();
        Self {
            store,
            notifier,
            clock,
            probe,
            booted_at,
            outage_started_at: None,
            fault: None,
        }
    }

    pub fn is_faulted(&self) -> bool {
        self.fault.is_some()
    }

    /// The loop keeps the watchdog quiet only while it is doing useful work.
    /// A latched fault or a lost link lets the watchdog restart the chip.
    pub fn should_feed_watchdog<L: Connectivity>(&self, link: &L) -> bool {
        link.is_connected() && !self.is_faulted()
    }

    pub fn tick<L: Connectivity>(&mut self, link: &L) -> TickOutcome {
        if let Some(byte) = self.fault {
            warn!("Power flag fault latched (byte {}), polling suspended", byte);
            return TickOutcome::Faulted;
        }

        if !link.is_connected() {
            return TickOutcome::Offline;
        }

        let raw = match self.store.read() {
            Ok(raw) => raw,
            Err(e) => {
                error!("Failed to read power flag: {:?}", e);
                return TickOutcome::StoreUnreadable;
            }
        };

        let Some(before) = raw.and_then(PowerState::from_flag) else {
            // Flash wear can leave garbage here. Another address or another
            // board is the fix; a restart re-initializes the flag.
            let byte = raw.unwrap_or(0);
            error!("Power flag storage error! Read {:?}", raw);
            self.fault = Some(byte);
            return TickOutcome::Faulted;
        };

        let now = PowerState::from_pin_level(self.probe.power_present());
        info!("status: {}", now);

        if before == now {
            return TickOutcome::Steady(now);
        }

        info!("status change detected, trying to send the message...");
        let timestamp = self.clock.now();
        let outage_secs = match now {
            PowerState::Present => {
                let started = self.outage_started_at.unwrap_or(self.booted_at);
                timestamp.saturating_sub(started)
            }
            PowerState::Absent => 0,
        };

        let text = message::message_for(now, outage_secs);
        if let Err(e) = self.notifier.send(&text) {
            warn!("Failed to send power {} message: {:?}", now, e);
            return TickOutcome::SendFailed(now);
        }

        // The outage start must survive a failed write: the stale flag makes
        // the next tick resend the same restored message.
        if let Err(e) = self.store.write(now.flag()) {
            error!("Failed to persist power flag: {:?}", e);
            return TickOutcome::PersistFailed(now);
        }

        self.outage_started_at = match now {
            PowerState::Absent => Some(timestamp),
            PowerState::Present => None,
        };

        info!("Power {} message sent and flag stored", now);
        TickOutcome::Notified(now)
    }
}
