//! Keyboard input handling

use std::collections::HashSet;

use game_core::{InputEvent, Key};
use winit::event::{ElementState, VirtualKeyCode};

/// Map a window key code to a game key
pub fn map_key(code: VirtualKeyCode) -> Key {
    match code {
        VirtualKeyCode::W => Key::W,
        VirtualKeyCode::S => Key::S,
        VirtualKeyCode::Up => Key::ArrowUp,
        VirtualKeyCode::Down => Key::ArrowDown,
        VirtualKeyCode::Escape => Key::Escape,
        _ => Key::Other,
    }
}

/// Tracks held keys so OS auto-repeat reaches the game as a single key-down
#[derive(Debug, Default)]
pub struct KeyTracker {
    held: HashSet<VirtualKeyCode>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_key(&mut self, code: VirtualKeyCode, state: ElementState) -> Option<InputEvent> {
        match state {
            // winit emits Pressed again for every repeat
            ElementState::Pressed => self
                .held
                .insert(code)
                .then(|| InputEvent::KeyDown(map_key(code))),
            ElementState::Released => {
                self.held.remove(&code);
                Some(InputEvent::KeyUp(map_key(code)))
            }
        }
    }

    /// Release everything, e.g. when the window loses focus
    pub fn release_all(&mut self) -> Vec<InputEvent> {
        self.held
            .drain()
            .map(|code| InputEvent::KeyUp(map_key(code)))
            .collect()
    }
}
