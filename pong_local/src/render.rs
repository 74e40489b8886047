use pong_core::{Renderer, RoundPhase, Snapshot};

/// Headless renderer: logs a JSON snapshot every `every` ticks and on phase changes
pub struct TextRenderer {
    every: u64,
    last_phase: Option<RoundPhase>,
    frames: u64,
}

impl TextRenderer {
    pub fn new(every: u64) -> Self {
        Self {
            every,
            last_phase: None,
            frames: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    fn should_log(&self, snapshot: &Snapshot) -> bool {
        let phase_changed = self.last_phase != Some(snapshot.phase);
        let periodic = self.every > 0 && snapshot.tick % self.every == 0;
        phase_changed || periodic
    }
}

impl Renderer for TextRenderer {
    fn draw(&mut self, snapshot: &Snapshot) {
        if self.should_log(snapshot) {
            match serde_json::to_string(snapshot) {
                Ok(json) => log::info!("{}", json),
                Err(err) => log::warn!("snapshot not serializable: {}", err),
            }
        }
        self.last_phase = Some(snapshot.phase);
        self.frames += 1;
    }
}
