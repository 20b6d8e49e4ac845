use crate::{Aabb, Arena, Ball, Events, Paddle, Side};
use hecs::World;
use tracing::trace;

/// Bounce the ball off whichever paddle it overlaps
pub fn check_paddle_collisions(world: &mut World, events: &mut Events) {
    // Collect paddle boxes without holding a borrow on the world
    let mut paddles: Vec<(Side, Aabb)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| (paddle.side, paddle.rect()))
        .collect();

    // Left paddle wins when both are hit in the same tick
    paddles.sort_by_key(|(side, _)| *side != Side::Left);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let ball_rect = ball.rect();
        let Some((side, paddle_rect)) = paddles.iter().find(|(_, r)| ball_rect.intersects(r))
        else {
            continue;
        };

        // Snap the leading edge flush against the paddle face
        match side {
            Side::Left => ball.pos.x = paddle_rect.max.x,
            Side::Right => ball.pos.x = paddle_rect.min.x - ball.size,
        }
        ball.vel.x = -ball.vel.x;

        events.ball_hit_paddle = true;
        trace!(side = ?side, vx = ball.vel.x, "ball_hit_paddle");
    }
}

/// Bounce the ball off the top and bottom walls
pub fn check_wall_bounce(world: &mut World, arena: &Arena, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let ball_rect = ball.rect();
        if ball_rect.intersects(&arena.top) {
            ball.pos.y = arena.top.max.y;
        } else if ball_rect.intersects(&arena.bottom) {
            ball.pos.y = arena.bottom.min.y - ball.size;
        } else {
            continue;
        }
        ball.vel.y = -ball.vel.y;

        events.ball_hit_wall = true;
        trace!(vy = ball.vel.y, "ball_hit_wall");
    }
}
