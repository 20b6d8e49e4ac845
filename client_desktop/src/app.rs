use game_core::{Control, GameWorld, InputEvent};
use thiserror::Error;
use tracing::{debug, error, info};
use winit::{
    dpi::LogicalSize,
    error::OsError,
    event::{Event, KeyboardInput, StartCause, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use crate::clock::Clock;
use crate::config::AppConfig;
use crate::input::KeyTracker;
use crate::renderer::Renderer;

/// Start-up failures of the desktop client
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to create window")]
    CreateWindow(#[source] OsError),
    #[error("failed to create frame buffer")]
    CreateRenderer(#[source] pixels::Error),
}

/// Open the window and run until the player quits
///
/// Each loop iteration drains input, steps the simulation, draws, then sleeps
/// out the rest of the tick.
pub fn run(config: AppConfig) -> Result<(), AppError> {
    let width = config.game.window_width as u32;
    let height = config.game.window_height as u32;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(config.title.as_str())
        .with_inner_size(LogicalSize::new(width, height))
        .with_resizable(false)
        .build(&event_loop)
        .map_err(AppError::CreateWindow)?;

    let mut renderer = Renderer::new(&window, width, height).map_err(AppError::CreateRenderer)?;

    let tick_interval = config.game.tick_interval();
    let mut clock = Clock::new(tick_interval);
    let mut keys = KeyTracker::new();
    let mut game = GameWorld::new(config.game, config.seed);

    info!(
        seed = config.seed,
        tick_rate = game.config.tick_rate,
        width,
        height,
        "pong_started"
    );

    event_loop.run(move |event, _, control_flow| match event {
        Event::NewEvents(StartCause::Init) => {
            *control_flow = ControlFlow::Poll;
        }
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => {
                apply_input(&mut game, InputEvent::Quit, control_flow);
            }
            WindowEvent::KeyboardInput {
                input:
                    KeyboardInput {
                        state,
                        virtual_keycode: Some(code),
                        ..
                    },
                ..
            } => {
                if let Some(input) = keys.on_key(code, state) {
                    apply_input(&mut game, input, control_flow);
                }
            }
            // Paddles would keep moving on keys released while unfocused
            WindowEvent::Focused(false) => {
                for input in keys.release_all() {
                    apply_input(&mut game, input, control_flow);
                }
            }
            _ => {}
        },
        Event::MainEventsCleared => {
            game.step();
            window.request_redraw();
        }
        Event::RedrawRequested(_) => {
            renderer.draw(&game.snapshot(), &game.config);
            if let Err(err) = renderer.present() {
                error!(error = %err, "present_failed");
                *control_flow = ControlFlow::ExitWithCode(1);
            }
        }
        Event::RedrawEventsCleared => {
            let elapsed = clock.tick();
            if elapsed > tick_interval * 2 {
                debug!(elapsed_ms = elapsed.as_millis() as u64, "tick_overrun");
            }
        }
        _ => {}
    })
}

fn apply_input(game: &mut GameWorld, input: InputEvent, control_flow: &mut ControlFlow) {
    if game.handle_input(input) == Control::Quit {
        info!(
            reason = ?input,
            left = game.score.left,
            right = game.score.right,
            "pong_quit"
        );
        *control_flow = ControlFlow::Exit;
    }
}
