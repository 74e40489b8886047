use std::collections::HashMap;

use pong_core::{Cue, CueSink};

/// Stand-in audio player: logs each cue and keeps a tally
#[derive(Debug, Default)]
pub struct LogAudio {
    counts: HashMap<Cue, u32>,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, cue: Cue) -> u32 {
        self.counts.get(&cue).copied().unwrap_or(0)
    }
}

impl CueSink for LogAudio {
    fn play(&mut self, cue: Cue) {
        log::debug!("play {:?}", cue);
        *self.counts.entry(cue).or_insert(0) += 1;
    }
}
