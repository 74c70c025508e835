//! Keyboard state
//!
//! Key events arrive between frames; the simulation samples the held state
//! once per tick through `tick_input`.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::sim::TickInput;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub quit: bool,
}

impl KeyState {
    /// Apply one key event. Returns true if the key is one we track.
    pub fn handle_key(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;
        match key {
            KeyCode::ArrowLeft | KeyCode::KeyA => self.left = pressed,
            KeyCode::ArrowRight | KeyCode::KeyD => self.right = pressed,
            KeyCode::Escape if pressed => self.quit = true,
            _ => return false,
        }
        true
    }

    /// Window lost focus: release held keys so the paddle doesn't run away
    pub fn release_all(&mut self) {
        self.left = false;
        self.right = false;
    }

    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_keys_map_to_tick_input() {
        let mut keys = KeyState::default();
        assert!(keys.handle_key(KeyCode::ArrowLeft, ElementState::Pressed));
        assert_eq!(
            keys.tick_input(),
            TickInput {
                left: true,
                right: false
            }
        );

        keys.handle_key(KeyCode::KeyD, ElementState::Pressed);
        keys.handle_key(KeyCode::ArrowLeft, ElementState::Released);
        assert_eq!(
            keys.tick_input(),
            TickInput {
                left: false,
                right: true
            }
        );

        keys.release_all();
        assert_eq!(keys.tick_input(), TickInput::default());
    }

    #[test]
    fn test_escape_requests_quit() {
        let mut keys = KeyState::default();
        assert!(!keys.handle_key(KeyCode::Escape, ElementState::Released));
        assert!(!keys.quit);
        assert!(keys.handle_key(KeyCode::Escape, ElementState::Pressed));
        assert!(keys.quit);
    }

    #[test]
    fn test_untracked_keys_ignored() {
        let mut keys = KeyState::default();
        assert!(!keys.handle_key(KeyCode::Space, ElementState::Pressed));
        assert_eq!(keys, KeyState::default());
    }
}
