use hecs::World;

use crate::components::*;

/// Keys the game distinguishes. Everything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    ArrowUp,
    ArrowDown,
    Escape,
    Other,
}

/// Raw input delivered by the platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

/// Whether the main loop should keep going after an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Paddle and direction bound to a key
pub fn binding(key: Key) -> Option<(Side, PaddleIntent)> {
    match key {
        Key::W => Some((Side::Left, PaddleIntent::Up)),
        Key::S => Some((Side::Left, PaddleIntent::Down)),
        Key::ArrowUp => Some((Side::Right, PaddleIntent::Up)),
        Key::ArrowDown => Some((Side::Right, PaddleIntent::Down)),
        Key::Escape | Key::Other => None,
    }
}

/// Start moving the bound paddle, unless it is already moving.
pub fn press_key(world: &mut World, key: Key) {
    let Some((side, dir)) = binding(key) else {
        return;
    };

    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side == side && *intent == PaddleIntent::Stop {
            *intent = dir;
        }
    }
}

/// Stop the bound paddle, but only if this key is what moved it.
pub fn release_key(world: &mut World, key: Key) {
    let Some((side, dir)) = binding(key) else {
        return;
    };

    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.side == side && *intent == dir {
            *intent = PaddleIntent::Stop;
        }
    }
}
