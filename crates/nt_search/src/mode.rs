use std::sync::atomic::{AtomicU8, Ordering};

use nt_core::{Mode, Result};

const ONLINE: u8 = 0;
const OFFLINE: u8 = 1;

/// Process-wide online/offline switch shared by every request.
///
/// Reads and writes are single atomic operations; a `set` that returns
/// before a `get` starts is always observed by it.
#[derive(Debug)]
pub struct ModeSwitch {
    value: AtomicU8,
}

impl ModeSwitch {
    pub fn new(mode: Mode) -> Self {
        Self {
            value: AtomicU8::new(encode(mode)),
        }
    }

    pub fn get(&self) -> Mode {
        match self.value.load(Ordering::Acquire) {
            OFFLINE => Mode::Offline,
            _ => Mode::Online,
        }
    }

    pub fn set(&self, mode: Mode) {
        self.value.store(encode(mode), Ordering::Release);
    }

    /// Parse and apply a mode name, exactly "online" or "offline" in any
    /// case. Nothing changes if the name is invalid.
    pub fn set_from_str(&self, value: &str) -> Result<Mode> {
        let mode = value.parse::<Mode>()?;
        self.set(mode);
        Ok(mode)
    }
}

impl Default for ModeSwitch {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

fn encode(mode: Mode) -> u8 {
    match mode {
        Mode::Online => ONLINE,
        Mode::Offline => OFFLINE,
    }
}
