use glam::Vec2;
use hecs::{Entity, World};

use crate::snapshot::{FieldView, PaddleView, PuckView, Snapshot};
use crate::systems::*;
use crate::{
    create_paddle, create_puck, Config, ConfigError, Cue, EdgeTrigger, Events, GameRng, Paddle,
    Puck, RoundAction, RoundFsm, RoundPhase, Score, Side, TickInput,
};

/// Everything one match owns: entities, score, phase and RNG
pub struct Game {
    world: World,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    fsm: RoundFsm,
    confirm: EdgeTrigger,
    puck: Entity,
    left: Entity,
    right: Entity,
    tick: u64,
}

impl Game {
    /// Build a match waiting for the first confirm press
    pub fn new(config: Config, mut rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let center_y = config.paddle_center_y();
        let left = create_paddle(&mut world, &config, Side::Left, center_y);
        let right = create_paddle(&mut world, &config, Side::Right, center_y);

        let mut puck = Puck::new(config.field_center(), Vec2::ZERO, config.puck_radius);
        serve(&mut puck, &config, &mut rng);
        let puck = create_puck(&mut world, puck);

        log::debug!(
            "new game on {}x{} field",
            config.field_width,
            config.field_height
        );

        Ok(Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            fsm: RoundFsm::new(),
            confirm: EdgeTrigger::new(),
            puck,
            left,
            right,
            tick: 0,
        })
    }

    /// Run one fixed simulation step and return what happened
    pub fn step(&mut self, input: &TickInput) -> &Events {
        self.events.clear();
        self.tick += 1;

        // 1. Round transitions; the edge is tracked in every phase
        if self.confirm.pressed(input.confirm) && self.transition(RoundAction::Confirm) {
            self.start_round();
        }

        // 2. Puck: goal first, then walls and paddles, then motion
        if self.fsm.is_active() {
            let goal = check_scoring(
                &mut self.world,
                &self.config,
                &mut self.score,
                &mut self.events,
            );
            if goal.is_some() {
                self.transition(RoundAction::Goal);
                reset_puck(&mut self.world, &self.config, &mut self.rng);
            } else {
                check_collisions(&mut self.world, &self.config, &mut self.events);
                move_puck(&mut self.world);
            }
        }

        // 3. Paddles
        if self.fsm.is_active() {
            ingest_inputs(&mut self.world, input);
            move_paddles(&mut self.world, &self.config);
        }

        &self.events
    }

    fn transition(&mut self, action: RoundAction) -> bool {
        let result = self.fsm.transition(action);
        if result.success {
            log::info!(
                "tick {}: round {:?} -> {:?} on {:?}",
                self.tick,
                result.from,
                result.to,
                result.action
            );
        } else {
            log::debug!(
                "tick {}: ignored {:?} while {:?}",
                self.tick,
                result.action,
                result.from
            );
        }
        result.success
    }

    fn start_round(&mut self) {
        reset_paddles(&mut self.world, &self.config);
        reset_puck(&mut self.world, &self.config, &mut self.rng);
        self.events.round_started = true;
        self.events.emit(Cue::RoundStart);
    }

    pub fn phase(&self) -> RoundPhase {
        self.fsm.phase()
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn rounds_started(&self) -> u32 {
        self.fsm.rounds_started()
    }

    // Puck and paddles are spawned in `new` and never despawned

    pub fn puck(&self) -> Puck {
        *self.world.get::<&Puck>(self.puck).expect("puck entity")
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        *self.world.get::<&Paddle>(self.paddle_entity(side)).expect("paddle entity")
    }

    /// Mutable access to entities, for hosts and tests that set up positions
    pub fn puck_mut(&mut self) -> hecs::RefMut<'_, Puck> {
        self.world.get::<&mut Puck>(self.puck).expect("puck entity")
    }

    pub fn paddle_mut(&mut self, side: Side) -> hecs::RefMut<'_, Paddle> {
        let entity = self.paddle_entity(side);
        self.world.get::<&mut Paddle>(entity).expect("paddle entity")
    }

    fn paddle_entity(&self, side: Side) -> Entity {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Everything a renderer needs for this tick
    pub fn snapshot(&self) -> Snapshot {
        let puck = self.puck();
        Snapshot {
            tick: self.tick,
            phase: self.phase(),
            field: FieldView::from(&self.config),
            puck: PuckView {
                center: puck.pos,
                radius: puck.radius,
                speed: puck.speed,
            },
            left: PaddleView::from(&self.paddle(Side::Left)),
            right: PaddleView::from(&self.paddle(Side::Right)),
            score: self.score,
        }
    }
}
