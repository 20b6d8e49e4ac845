use crate::{Arena, Ball, Config, Events, Score, Side};
use hecs::World;

/// Check if ball left the arena (scoring)
///
/// Returns the side that won the point. At most one side scores per tick.
pub fn check_scoring(
    world: &mut World,
    arena: &Arena,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) -> Option<Side> {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let ball_rect = ball.rect();

        // A ball found wholly past a side wall still counts, so nothing tunnels out
        let conceded = if ball_rect.intersects(&arena.left) || ball_rect.max.x <= arena.left.min.x {
            Side::Left
        } else if ball_rect.intersects(&arena.right) || ball_rect.min.x >= arena.right.max.x {
            Side::Right
        } else {
            continue;
        };
        let scorer = conceded.opponent();

        score.increment(scorer);
        events.record_point(scorer);
        ball.recenter(config.center());
        return Some(scorer);
    }
    None
}
