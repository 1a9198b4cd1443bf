use std::time::{Duration, Instant};

use log::{info, warn};

use crate::monitor::{Monitor, TickOutcome};
use crate::ports::{Clock, Connectivity, FlagStore, Notifier, PowerProbe, Watchdog};

const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Fixed-interval timer. Fires at most once per `poll`; deadlines missed
/// while the loop was blocked are dropped instead of replayed.
pub struct Ticker {
    interval: Duration,
    next: Instant,
}

impl Ticker {
    /// A zero interval is raised to one millisecond so `poll` always moves
    /// the deadline forward.
    pub fn new(interval: Duration, now: Instant) -> Self {
        let interval = interval.max(MIN_INTERVAL);
        Self {
            interval,
            next: now + interval,
        }
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        while self.next <= now {
            self.next += self.interval;
        }
        true
    }
}

/// One control loop: the monitor plus its polling timer.
pub struct Runner<S, N, C, P> {
    monitor: Monitor<S, N, C, P>,
    ticker: Ticker,
}

impl<S, N, C, P> Runner<S, N, C, P>
where
    S: FlagStore,
    N: Notifier,
    C: Clock,
    P: PowerProbe,
{
    pub fn new(monitor: Monitor<S, N, C, P>, interval: Duration, now: Instant) -> Self {
        Self {
            monitor,
            ticker: Ticker::new(interval, now),
        }
    }

    #[cfg(test)]
    pub fn monitor(&self) -> &Monitor<S, N, C, P> {
        &self.monitor
    }

    /// One pass of the loop. Returns the tick outcome when a tick was due.
    pub fn service<L, W>(&mut self, link: &mut L, watchdog: &mut W, now: Instant) -> Option<TickOutcome>
    where
        L: Connectivity,
        W: Watchdog,
    {
        if self.monitor.should_feed_watchdog(link) {
            watchdog.feed();
        }

        if !self.ticker.poll(now) {
            return None;
        }

        let outcome = self.monitor.tick(link);
        if outcome == TickOutcome::Offline {
            warn!("WiFi is down, reconnecting...");
            match link.reconnect() {
                Ok(()) => info!("WiFi reconnected"),
                Err(e) => warn!("WiFi reconnect failed: {:?}", e),
            }
        }
        Some(outcome)
    }
}
