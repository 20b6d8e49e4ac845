use hecs::World;
use tracing::debug;

use crate::components::*;
use crate::resources::*;
use crate::Config;

/// Put the ball back in the middle with a fresh random velocity
pub fn serve_ball(world: &mut World, config: &Config, rng: &mut GameRng) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.serve(config, rng);
        debug!(vx = ball.vel.x, vy = ball.vel.y, "ball_served");
    }
}
