//! Keyboard state and bindings
//!
//! Left paddle: W / S. Right paddle: O / L. Confirm: Enter or Space.

use pong_core::TickInput;

/// Keys currently held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardState {
    pub w: bool,
    pub s: bool,
    pub o: bool,
    pub l: bool,
    pub confirm: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down event; returns false for unbound keys
    pub fn key_down(&mut self, key: &str) -> bool {
        self.set(key, true)
    }

    /// Handle key up event; returns false for unbound keys
    pub fn key_up(&mut self, key: &str) -> bool {
        self.set(key, false)
    }

    fn set(&mut self, key: &str, down: bool) -> bool {
        let slot = match key {
            "w" | "W" => &mut self.w,
            "s" | "S" => &mut self.s,
            "o" | "O" => &mut self.o,
            "l" | "L" => &mut self.l,
            "Enter" | " " | "Space" => &mut self.confirm,
            _ => return false,
        };
        *slot = down;
        true
    }

    pub fn to_input(self) -> TickInput {
        TickInput {
            left_up: self.w,
            left_down: self.s,
            right_up: self.o,
            right_down: self.l,
            confirm: self.confirm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings_map_to_paddles() {
        let mut keys = KeyboardState::new();
        assert!(keys.key_down("W"));
        assert!(keys.key_down("l"));
        let input = keys.to_input();
        assert!(input.left_up && !input.left_down);
        assert!(input.right_down && !input.right_up);
    }

    #[test]
    fn test_key_up_releases() {
        let mut keys = KeyboardState::new();
        keys.key_down("Enter");
        assert!(keys.to_input().confirm);
        keys.key_up("Enter");
        assert!(!keys.to_input().confirm);
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut keys = KeyboardState::new();
        assert!(!keys.key_down("ArrowUp"));
        assert_eq!(keys, KeyboardState::new());
    }
}
