//! Round State Machine
//!
//! Play alternates between waiting for a confirm press and an active rally.

use serde::{Deserialize, Serialize};

/// Round phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoundPhase {
    #[default]
    Waiting,
    Active,
}

/// Actions that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundAction {
    /// Confirm key pressed (edge, not level)
    Confirm,
    /// The puck crossed a goal line
    Goal,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from: RoundPhase,
    pub to: RoundPhase,
    pub action: RoundAction,
}

/// Round Finite State Machine
#[derive(Debug, Clone, Default)]
pub struct RoundFsm {
    phase: RoundPhase,
    rounds_started: u32,
}

impl RoundFsm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current phase
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Number of Waiting -> Active transitions so far
    pub fn rounds_started(&self) -> u32 {
        self.rounds_started
    }

    pub fn is_active(&self) -> bool {
        self.phase == RoundPhase::Active
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: RoundAction) -> TransitionResult {
        let from = self.phase;

        match self.next_phase(action) {
            Some(to) => {
                self.phase = to;
                if to == RoundPhase::Active {
                    self.rounds_started += 1;
                }
                TransitionResult {
                    success: true,
                    from,
                    to,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from,
                to: from,
                action,
            },
        }
    }

    fn next_phase(&self, action: RoundAction) -> Option<RoundPhase> {
        match (self.phase, action) {
            (RoundPhase::Waiting, RoundAction::Confirm) => Some(RoundPhase::Active),
            (RoundPhase::Active, RoundAction::Goal) => Some(RoundPhase::Waiting),
            _ => None,
        }
    }
}

/// Turns a held key level into a single press per hold
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeTrigger {
    was_down: bool,
}

impl EdgeTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this tick's key level; true only on the tick the key goes down
    pub fn pressed(&mut self, down: bool) -> bool {
        let edge = down && !self.was_down;
        self.was_down = down;
        edge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase() {
        let fsm = RoundFsm::new();
        assert_eq!(fsm.phase(), RoundPhase::Waiting);
        assert_eq!(fsm.rounds_started(), 0);
    }

    #[test]
    fn test_confirm_starts_round() {
        let mut fsm = RoundFsm::new();
        let result = fsm.transition(RoundAction::Confirm);
        assert!(result.success);
        assert_eq!(result.from, RoundPhase::Waiting);
        assert_eq!(result.to, RoundPhase::Active);
        assert!(fsm.is_active());
        assert_eq!(fsm.rounds_started(), 1);
    }

    #[test]
    fn test_goal_ends_round() {
        let mut fsm = RoundFsm::new();
        fsm.transition(RoundAction::Confirm);
        let result = fsm.transition(RoundAction::Goal);
        assert!(result.success);
        assert_eq!(fsm.phase(), RoundPhase::Waiting);
    }

    #[test]
    fn test_invalid_transitions() {
        let mut fsm = RoundFsm::new();
        let result = fsm.transition(RoundAction::Goal);
        assert!(!result.success);
        assert_eq!(result.to, RoundPhase::Waiting);

        fsm.transition(RoundAction::Confirm);
        let result = fsm.transition(RoundAction::Confirm);
        assert!(!result.success);
        assert_eq!(fsm.phase(), RoundPhase::Active);
        assert_eq!(fsm.rounds_started(), 1);
    }

    #[test]
    fn test_edge_trigger_fires_once_per_hold() {
        let mut edge = EdgeTrigger::new();
        let presses: Vec<bool> = [true, true, true, false, true, false]
            .into_iter()
            .map(|down| edge.pressed(down))
            .collect();
        assert_eq!(presses, vec![true, false, false, false, true, false]);
    }
}
