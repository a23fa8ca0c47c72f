//! Pong Classic entry point
//!
//! Wires the engine to its collaborators and runs the frame loop to
//! completion. Until a real window/renderer backend is plugged into
//! the platform traits, this binary drives a headless attract-mode
//! demo: it starts a match, leans both paddles into the walls so the
//! containment logic steers them, and quits after a fixed run.

use glam::Vec2;

use pong_classic::app::App;
use pong_classic::platform::{FrameSink, InitError, InputSnapshot, InputSource, Registry};
use pong_classic::scene::Scene;

/// Frames the demo runs before requesting quit (~12 s at 10 ms/frame)
const DEMO_FRAMES: u64 = 1200;

/// Scripted demo input: hover and click Start, then hold both paddles
/// against the walls
struct DemoInput {
    frame: u64,
    total: u64,
}

impl DemoInput {
    fn init(total: u64) -> Result<Self, InitError> {
        Ok(Self { frame: 0, total })
    }
}

impl InputSource for DemoInput {
    fn poll(&mut self) -> InputSnapshot {
        self.frame += 1;
        let start_button = Vec2::new(600.0, 380.0);

        if self.frame >= self.total {
            return InputSnapshot {
                quit: true,
                ..InputSnapshot::default()
            };
        }
        if self.frame < 30 {
            // Hover the Start button for a few frames, then click it
            return InputSnapshot {
                pointer: start_button,
                clicking: self.frame == 29,
                ..InputSnapshot::default()
            };
        }
        InputSnapshot {
            left_up: true,
            right_down: true,
            ..InputSnapshot::default()
        }
    }
}

/// Logs a score line periodically instead of drawing
#[derive(Default)]
struct ConsoleSink {
    frames: u64,
}

impl ConsoleSink {
    fn init() -> Result<Self, InitError> {
        Ok(Self::default())
    }
}

impl FrameSink for ConsoleSink {
    fn present(&mut self, scene: &Scene, _resources: &Registry) {
        self.frames += 1;
        if self.frames % 200 == 0 {
            log::info!(
                "frame {}: {:?} {} - {} ball at ({}, {})",
                self.frames,
                scene.phase,
                scene.scores.0,
                scene.scores.1,
                scene.ball.x,
                scene.ball.y
            );
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Pong Classic starting");

    let input = match DemoInput::init(DEMO_FRAMES) {
        Ok(input) => input,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    let sink = match ConsoleSink::init() {
        Ok(sink) => sink,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    App::new(input, sink).run();
}
