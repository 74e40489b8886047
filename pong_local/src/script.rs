//! Input sources for the headless loop

use std::collections::VecDeque;

use serde::Deserialize;

use crate::keys::KeyboardState;
use pong_core::TickInput;

/// Per-tick input provider; `None` means the window was asked to close
pub trait InputSource {
    fn poll(&mut self, tick: u64) -> Option<TickInput>;
}

impl<F> InputSource for F
where
    F: FnMut(u64) -> Option<TickInput>,
{
    fn poll(&mut self, tick: u64) -> Option<TickInput> {
        self(tick)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeyEvent {
    pub tick: u64,
    pub key: String,
    pub down: bool,
}

/// Recorded key presses and releases, replayed by tick
#[derive(Debug, Clone, Deserialize)]
pub struct InputScript {
    pub events: Vec<KeyEvent>,
    /// Tick after which the script asks to close; defaults to the last event
    #[serde(default)]
    pub end_tick: Option<u64>,
}

impl InputScript {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

pub struct ScriptedInput {
    pending: VecDeque<KeyEvent>,
    keys: KeyboardState,
    end_tick: u64,
}

impl ScriptedInput {
    pub fn new(script: InputScript) -> Self {
        let mut events = script.events;
        events.sort_by_key(|event| event.tick);
        let last = events.last().map_or(0, |event| event.tick);
        Self {
            end_tick: script.end_tick.unwrap_or(last),
            pending: events.into(),
            keys: KeyboardState::new(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, tick: u64) -> Option<TickInput> {
        if tick > self.end_tick {
            return None;
        }
        while let Some(event) = self.pending.front() {
            if event.tick > tick {
                break;
            }
            if let Some(event) = self.pending.pop_front() {
                let known = if event.down {
                    self.keys.key_down(&event.key)
                } else {
                    self.keys.key_up(&event.key)
                };
                if !known {
                    log::warn!("tick {}: unbound key {:?} ignored", event.tick, event.key);
                }
            }
        }
        Some(self.keys.to_input())
    }
}

/// Taps confirm at a fixed interval and leaves the paddles alone
pub struct AutoServe {
    pub interval: u64,
}

impl InputSource for AutoServe {
    fn poll(&mut self, tick: u64) -> Option<TickInput> {
        Some(TickInput {
            confirm: tick % self.interval.max(1) == 0,
            ..TickInput::new()
        })
    }
}
