use crate::{Arena, Ball, Config, Paddle, PaddleIntent};
use hecs::World;

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        paddle.pos.y += intent.dir() * config.paddle_speed;
    }
}

/// Stop paddles at the top and bottom walls
pub fn clamp_paddles(world: &mut World, arena: &Arena) {
    let (min_y, _) = arena.clamp_range(0.0);
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &mut PaddleIntent)>() {
        if paddle.rect().intersects(&arena.top) || paddle.pos.y < min_y {
            *intent = PaddleIntent::Stop;
            paddle.pos.y = arena.top.max.y;
        }

        let (_, max_y) = arena.clamp_range(paddle.size.y);
        if paddle.rect().intersects(&arena.bottom) || paddle.pos.y > max_y {
            *intent = PaddleIntent::Stop;
            paddle.pos.y = max_y;
        }
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Side};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Arena) {
        let config = Config::new();
        let arena = Arena::new(&config);
        (World::new(), config, arena)
    }

    fn set_paddle(world: &mut World, y: f32, dir: PaddleIntent) {
        for (_e, (paddle, intent)) in world.query_mut::<(&mut Paddle, &mut PaddleIntent)>() {
            paddle.pos.y = y;
            *intent = dir;
        }
    }

    fn paddle_state(world: &World) -> (f32, PaddleIntent) {
        world
            .query::<(&Paddle, &PaddleIntent)>()
            .iter()
            .next()
            .map(|(_e, (p, i))| (p.pos.y, *i))
            .unwrap()
    }

    #[test]
    fn test_paddle_moves_up_by_speed() {
        let (mut world, config, arena) = setup_world();
        create_paddle(&mut world, Side::Left, &config);
        set_paddle(&mut world, 200.0, PaddleIntent::Up);

        move_paddles(&mut world, &config);
        clamp_paddles(&mut world, &arena);

        assert_eq!(paddle_state(&world), (190.0, PaddleIntent::Up));
    }

    #[test]
    fn test_paddle_moves_down_by_speed() {
        let (mut world, config, arena) = setup_world();
        create_paddle(&mut world, Side::Right, &config);
        set_paddle(&mut world, 200.0, PaddleIntent::Down);

        move_paddles(&mut world, &config);
        clamp_paddles(&mut world, &arena);

        assert_eq!(paddle_state(&world), (210.0, PaddleIntent::Down));
    }

    #[test]
    fn test_stopped_paddle_stays_put() {
        let (mut world, config, arena) = setup_world();
        create_paddle(&mut world, Side::Left, &config);

        move_paddles(&mut world, &config);
        clamp_paddles(&mut world, &arena);

        assert_eq!(paddle_state(&world), (210.0, PaddleIntent::Stop));
    }

    #[test]
    fn test_paddle_snaps_to_top_wall() {
        let (mut world, config, arena) = setup_world();
        create_paddle(&mut world, Side::Left, &config);
        set_paddle(&mut world, 12.0, PaddleIntent::Up);

        move_paddles(&mut world, &config);
        clamp_paddles(&mut world, &arena);

        assert_eq!(
            paddle_state(&world),
            (5.0, PaddleIntent::Stop),
            "Paddle should rest against the top wall and stop"
        );
    }

    #[test]
    fn test_paddle_snaps_to_bottom_wall() {
        let (mut world, config, arena) = setup_world();
        create_paddle(&mut world, Side::Right, &config);
        set_paddle(&mut world, 410.0, PaddleIntent::Down);

        move_paddles(&mut world, &config);
        clamp_paddles(&mut world, &arena);

        assert_eq!(paddle_state(&world), (415.0, PaddleIntent::Stop));
    }

    #[test]
    fn test_paddle_touching_wall_is_not_clamped() {
        let (mut world, config, arena) = setup_world();
        create_paddle(&mut world, Side::Left, &config);
        set_paddle(&mut world, 5.0, PaddleIntent::Down);

        clamp_paddles(&mut world, &arena);

        assert_eq!(
            paddle_state(&world),
            (5.0, PaddleIntent::Down),
            "Touching edges are not a collision"
        );
    }

    #[test]
    fn test_ball_moves_by_velocity() {
        let (mut world, config, _arena) = setup_world();
        create_ball(&mut world, Vec2::new(100.0, 100.0), config.ball_size, Vec2::new(8.0, -3.0));

        move_ball(&mut world);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(108.0, 97.0));
        }
    }
}
