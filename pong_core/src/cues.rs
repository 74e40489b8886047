//! Audio cue dispatch
//!
//! The simulation only records cues; playing them is up to the host.

use crate::{Cue, Events};

/// Receives cues to play, possibly several per tick
pub trait CueSink {
    fn play(&mut self, cue: Cue);
}

/// Collects cues, handy for tests and replays
impl CueSink for Vec<Cue> {
    fn play(&mut self, cue: Cue) {
        self.push(cue);
    }
}

/// Forward a tick's cues to the sink in emission order
pub fn dispatch_cues<S: CueSink + ?Sized>(events: &Events, sink: &mut S) {
    for &cue in &events.cues {
        sink.play(cue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_keeps_order() {
        let mut events = Events::new();
        events.emit(Cue::WallHit);
        events.emit(Cue::PaddleHit);

        let mut played: Vec<Cue> = Vec::new();
        dispatch_cues(&events, &mut played);

        assert_eq!(played, vec![Cue::WallHit, Cue::PaddleHit]);
    }

    #[test]
    fn test_dispatch_through_trait_object() {
        let mut events = Events::new();
        events.emit(Cue::Goal);

        let mut played: Vec<Cue> = Vec::new();
        {
            let sink: &mut dyn CueSink = &mut played;
            dispatch_cues(&events, sink);
        }

        assert_eq!(played, vec![Cue::Goal]);
    }
}
