//! Fixed-tick loop: poll input, step, draw, play cues

use std::time::{Duration, Instant};

use pong_core::{dispatch_cues, CueSink, Game, Renderer, Score};

use crate::script::InputSource;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub ticks: u64,
    pub rounds: u32,
    pub score: Score,
    pub peak_speed: f32,
}

pub struct Runner {
    /// Stop after this many ticks even if input keeps coming
    pub max_ticks: Option<u64>,
    /// Sleep to hold this frame time; `None` runs as fast as possible
    pub frame_time: Option<Duration>,
}

impl Runner {
    pub fn run<I, R, A>(
        &self,
        game: &mut Game,
        input: &mut I,
        renderer: &mut R,
        audio: &mut A,
    ) -> Summary
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
        A: CueSink + ?Sized,
    {
        let mut peak_speed = game.puck().speed;

        loop {
            let tick = game.tick();
            if self.max_ticks.is_some_and(|max| tick >= max) {
                log::info!("tick limit {} reached", tick);
                break;
            }
            let Some(tick_input) = input.poll(tick) else {
                log::info!("input closed at tick {}", tick);
                break;
            };

            let started = Instant::now();
            let events = game.step(&tick_input);
            dispatch_cues(events, audio);
            renderer.draw(&game.snapshot());
            peak_speed = peak_speed.max(game.puck().speed);

            if let Some(frame) = self.frame_time {
                if let Some(rest) = frame.checked_sub(started.elapsed()) {
                    std::thread::sleep(rest);
                }
            }
        }

        Summary {
            ticks: game.tick(),
            rounds: game.rounds_started(),
            score: game.score,
            peak_speed,
        }
    }
}
