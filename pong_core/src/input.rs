use serde::{Deserialize, Serialize};

use crate::components::{PaddleIntent, Side};

/// Key levels sampled by the host once per tick
///
/// `confirm` is the raw held state; the game derives the press edge itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
    pub confirm: bool,
}

impl TickInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Movement intent for one paddle
    pub fn intent(&self, side: Side) -> PaddleIntent {
        match side {
            Side::Left => PaddleIntent::from_keys(self.left_up, self.left_down),
            Side::Right => PaddleIntent::from_keys(self.right_up, self.right_down),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_per_side() {
        let input = TickInput {
            left_up: true,
            right_down: true,
            ..TickInput::new()
        };
        assert_eq!(input.intent(Side::Left).dir, -1);
        assert_eq!(input.intent(Side::Right).dir, 1);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let input = TickInput {
            left_up: true,
            left_down: true,
            ..TickInput::new()
        };
        assert_eq!(input.intent(Side::Left).dir, 0);
    }
}
