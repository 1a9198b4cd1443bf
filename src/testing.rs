//! Fakes for the port traits. Each fake is a cheap handle around shared
//! state so a test can keep one clone and inspect it after the monitor has
//! taken ownership of the other.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use anyhow::{anyhow, Result};

use crate::ports::{Clock, Connectivity, FlagStore, Notifier, PowerProbe, Watchdog};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Default)]
struct StoreState {
    value: Option<u8>,
    writes: Vec<u8>,
    fail_reads: bool,
    fail_writes: bool,
}

#[derive(Clone, Default)]
pub struct FakeStore(Rc<RefCell<StoreState>>);

impl FakeStore {
    pub fn with(value: Option<u8>) -> Self {
        let store = Self::default();
        store.0.borrow_mut().value = value;
        store
    }

    pub fn value(&self) -> Option<u8> {
        self.0.borrow().value
    }

    pub fn set_value(&self, value: Option<u8>) {
        self.0.borrow_mut().value = value;
    }

    pub fn writes(&self) -> Vec<u8> {
        self.0.borrow().writes.clone()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.0.borrow_mut().fail_reads = fail;
    }

    pub fn fail_writes(&self, fail: bool) {
        self.0.borrow_mut().fail_writes = fail;
    }
}

impl FlagStore for FakeStore {
    fn read(&mut self) -> Result<Option<u8>> {
        let state = self.0.borrow();
        if state.fail_reads {
            return Err(anyhow!("nvs read failed"));
        }
        Ok(state.value)
    }

    fn write(&mut self, flag: u8) -> Result<()> {
        let mut state = self.0.borrow_mut();
        if state.fail_writes {
            return Err(anyhow!("nvs write failed"));
        }
        state.value = Some(flag);
        state.writes.push(flag);
        Ok(())
    }
}

#[derive(Default)]
struct NotifierState {
    attempts: Vec<String>,
    // Results handed out in order; once drained every send succeeds.
    scripted: VecDeque<bool>,
}

#[derive(Clone, Default)]
pub struct FakeNotifier(Rc<RefCell<NotifierState>>);

impl FakeNotifier {
    pub fn script(&self, results: &[bool]) {
        self.0.borrow_mut().scripted.extend(results.iter().copied());
    }

    pub fn attempts(&self) -> Vec<String> {
        self.0.borrow().attempts.clone()
    }
}

impl Notifier for FakeNotifier {
    fn send(&mut self, text: &str) -> Result<()> {
        let mut state = self.0.borrow_mut();
        state.attempts.push(text.to_string());
        match state.scripted.pop_front() {
            Some(false) => Err(anyhow!("connection reset")),
            _ => Ok(()),
        }
    }
}

#[derive(Clone, Default)]
pub struct FakeClock(Rc<Cell<u64>>);

impl FakeClock {
    pub fn at(now: u64) -> Self {
        Self(Rc::new(Cell::new(now)))
    }

    pub fn advance(&self, secs: u64) {
        self.0.set(self.0.get() + secs);
    }
}

impl Clock for FakeClock {
    fn now(&self) -> u64 {
        self.0.get()
    }
}

#[derive(Clone)]
pub struct FakeProbe(Rc<Cell<bool>>);

impl FakeProbe {
    pub fn powered(present: bool) -> Self {
        Self(Rc::new(Cell::new(present)))
    }

    pub fn set(&self, present: bool) {
        self.0.set(present);
    }
}

impl PowerProbe for FakeProbe {
    fn power_present(&mut self) -> bool {
        self.0.get()
    }
}

#[derive(Default)]
pub struct FakeLink {
    pub connected: bool,
    pub reconnects: usize,
    pub reconnect_succeeds: bool,
}

impl FakeLink {
    pub fn up() -> Self {
        Self {
            connected: true,
            ..Default::default()
        }
    }

    pub fn down() -> Self {
        Self::default()
    }
}

impl Connectivity for FakeLink {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn reconnect(&mut self) -> Result<()> {
        self.reconnects += 1;
        if self.reconnect_succeeds {
            self.connected = true;
            Ok(())
        } else {
            Err(anyhow!("no AP in range"))
        }
    }
}

#[derive(Default)]
pub struct FakeWatchdog {
    pub feeds: usize,
}

impl Watchdog for FakeWatchdog {
    fn feed(&mut self) {
        self.feeds += 1;
    }
}
