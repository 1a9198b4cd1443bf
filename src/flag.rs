use core::fmt;

// Stored byte values. Anything else read back means the storage is corrupt.
pub const NO_POWER_FLAG: u8 = 7;
pub const WITH_POWER_FLAG: u8 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    Present,
    Absent,
}

impl PowerState {
    pub fn from_flag(flag: u8) -> Option<Self> {
        match flag {
            WITH_POWER_FLAG => Some(Self::Present),
            NO_POWER_FLAG => Some(Self::Absent),
            _ => None,
        }
    }

    pub fn flag(self) -> u8 {
        match self {
            Self::Present => WITH_POWER_FLAG,
            Self::Absent => NO_POWER_FLAG,
        }
    }

    /// The probe is active-high.
    pub fn from_pin_level(high: bool) -> Self {
        if high {
            Self::Present
        } else {
            Self::Absent
        }
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present => f.write_str("on"),
            Self::Absent => f.write_str("off"),
        }
    }
}
