//! The single owned aggregate holding everything one game session mutates.

use glam::Vec2;
use hecs::World;
use tracing::info;

use crate::systems::{press_key, release_key, serve_ball};
use crate::{
    create_ball, create_paddle, Aabb, Arena, Ball, Config, Control, Events, FsmState, GameAction,
    GameFsm, GameRng, InputEvent, Key, Paddle, PaddleIntent, Score, Side,
};

/// Read-only view of a tick, everything the presenter draws
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub walls: [Aabb; 5],
    pub left_paddle: Aabb,
    pub right_paddle: Aabb,
    pub ball: Aabb,
    pub score: Score,
    pub state: FsmState,
}

impl Snapshot {
    /// Every rectangle in draw order: net, walls, paddles, ball
    pub fn rects(&self) -> impl Iterator<Item = Aabb> + '_ {
        self.walls
            .iter()
            .copied()
            .chain([self.left_paddle, self.right_paddle, self.ball])
    }
}

pub struct GameWorld {
    pub world: World,
    pub arena: Arena,
    pub config: Config,
    pub score: Score,
    pub fsm: GameFsm,
    pub events: Events,
    pub rng: GameRng,
}

impl GameWorld {
    /// Fresh session: state Over, 0-0, everything in its starting position
    pub fn new(config: Config, seed: u64) -> Self {
        let arena = Arena::new(&config);
        let mut world = World::new();

        // Create paddles
        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);

        // Create ball
        create_ball(
            &mut world,
            config.ball_start(),
            config.ball_size,
            Vec2::new(config.ball_speed, 0.0),
        );

        Self {
            world,
            arena,
            config,
            score: Score::new(),
            fsm: GameFsm::new(),
            events: Events::new(),
            rng: GameRng::new(seed),
        }
    }

    /// Feed one platform event through the input sampler
    pub fn handle_input(&mut self, event: InputEvent) -> Control {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => Control::Quit,
            InputEvent::KeyDown(key) => {
                let result = self.fsm.transition(GameAction::KeyPressed);
                if result.is_new_match() {
                    self.score.reset();
                    info!("match_started");
                }
                if result.is_serve() {
                    serve_ball(&mut self.world, &self.config, &mut self.rng);
                }

                press_key(&mut self.world, key);
                Control::Continue
            }
            InputEvent::KeyUp(key) => {
                release_key(&mut self.world, key);
                Control::Continue
            }
        }
    }

    /// Advance one tick
    pub fn step(&mut self) {
        crate::step(
            &mut self.world,
            &self.arena,
            &self.config,
            &mut self.score,
            &mut self.fsm,
            &mut self.events,
        );
    }

    pub fn state(&self) -> FsmState {
        self.fsm.state()
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
    }

    pub fn paddle_intent(&self, side: Side) -> Option<PaddleIntent> {
        self.world
            .query::<(&Paddle, &PaddleIntent)>()
            .iter()
            .find(|(_e, (paddle, _))| paddle.side == side)
            .map(|(_e, (_, intent))| *intent)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    /// Overwrite the ball's position and velocity
    pub fn set_ball(&mut self, pos: Vec2, vel: Vec2) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    /// Overwrite one paddle's top edge and intent
    pub fn set_paddle(&mut self, side: Side, y: f32, intent: PaddleIntent) {
        for (_entity, (paddle, current)) in self
            .world
            .query_mut::<(&mut Paddle, &mut PaddleIntent)>()
        {
            if paddle.side == side {
                paddle.pos.y = y;
                *current = intent;
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let paddle_rect = |side| {
            self.paddle(side)
                .unwrap_or_else(|| Paddle::new(side, &self.config))
                .rect()
        };
        let ball = self.ball().map(|ball| ball.rect()).unwrap_or_else(|| {
            Aabb::from_pos_size(self.config.ball_start(), Vec2::splat(self.config.ball_size))
        });

        Snapshot {
            walls: self.arena.rects(),
            left_paddle: paddle_rect(Side::Left),
            right_paddle: paddle_rect(Side::Right),
            ball,
            score: self.score,
            state: self.fsm.state(),
        }
    }
}
