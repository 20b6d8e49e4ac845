pub mod components;
pub mod config;
pub mod fsm;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;
pub mod world;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use systems::{Control, InputEvent, Key};
pub use world::*;

use hecs::World;
use systems::*;
use tracing::{debug, info};

/// Advance the Pong simulation by one tick
///
/// Does nothing but clear the events unless the state machine is `Running`.
pub fn step(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    fsm: &mut GameFsm,
    events: &mut Events,
) {
    // Clear events at start of tick
    events.clear();

    if !fsm.is_running() {
        return;
    }

    // 1. Move paddles based on intents
    move_paddles(world, config);

    // 2. Stop paddles at the top and bottom walls
    clamp_paddles(world, arena);

    // 3. Move ball
    move_ball(world);

    // 4. Bounce off paddles (left first)
    check_paddle_collisions(world, events);

    // 5. Check scoring (ball reached a side wall)
    if let Some(scorer) = check_scoring(world, arena, config, score, events) {
        let action = match score.has_winner(config.max_score) {
            Some(_) => GameAction::MatchWon,
            None => GameAction::PointScored,
        };
        fsm.transition(action);

        if fsm.is_game_over() {
            info!(winner = ?scorer, left = score.left, right = score.right, "match_over");
        } else {
            debug!(scorer = ?scorer, left = score.left, right = score.right, "point_scored");
        }
    }

    // 6. Bounce off the top and bottom walls
    check_wall_bounce(world, arena, events);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::new(side, config), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, size: f32, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, size, vel),))
}
