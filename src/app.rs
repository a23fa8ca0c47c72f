//! Single-threaded frame-loop driver
//!
//! Each frame executes strictly: clock tick, input poll, ui routing,
//! simulation tick, scene submission, frame-rate-limiting delay.
//! All engine state is owned here; nothing is shared across threads.

use std::thread;
use std::time::Duration;

use crate::consts::FRAME_DELAY_MS;
use crate::platform::{FrameSink, InputSnapshot, InputSource, Registry};
use crate::scene::Scene;
use crate::sim::{tick, FrameClock, GamePhase, MatchState, TickInput};
use crate::ui::{ButtonId, CursorIcon, Screen};

/// The game application: engine state plus its two collaborators
pub struct App<I, S> {
    input: I,
    sink: S,
    clock: FrameClock,
    state: MatchState,
    menu: Screen,
    paused: Screen,
    game_over: Screen,
    resources: Registry,
    cursor: CursorIcon,
    running: bool,
}

impl<I: InputSource, S: FrameSink> App<I, S> {
    pub fn new(input: I, sink: S) -> Self {
        let mut resources = Registry::new();
        // Shared handles live for the whole run and are released once
        // when the registry drops
        resources.font("joystix");
        resources.cursor(CursorIcon::Arrow);
        resources.cursor(CursorIcon::Hand);

        Self {
            input,
            sink,
            clock: FrameClock::new(),
            state: MatchState::new(),
            menu: Screen::menu(),
            paused: Screen::paused(),
            game_over: Screen::game_over(),
            resources,
            cursor: CursorIcon::Arrow,
            running: true,
        }
    }

    /// Run to completion. The `running` flag is cooperative: a quit
    /// request still finishes the current frame's render.
    pub fn run(&mut self) {
        log::info!("frame loop starting");
        while self.running {
            self.frame();
            thread::sleep(Duration::from_millis(FRAME_DELAY_MS));
        }
        log::info!(
            "frame loop stopped at {} - {}",
            self.state.score_left,
            self.state.score_right
        );
    }

    /// Advance exactly one frame
    pub fn frame(&mut self) {
        self.clock.tick();
        let snapshot = self.input.poll();
        if snapshot.quit {
            self.running = false;
        }

        let tick_input = self.route_input(&snapshot);
        tick(&mut self.state, &tick_input, &self.clock);

        let scene = Scene::compose(&self.state, self.active_screen(), self.cursor);
        self.sink.present(&scene, &self.resources);
    }

    /// Translate the raw snapshot into simulation commands, running
    /// pointer hit-tests against whichever screen is active
    fn route_input(&mut self, snapshot: &InputSnapshot) -> TickInput {
        let mut input = TickInput {
            left_up: snapshot.left_up,
            left_down: snapshot.left_down,
            right_up: snapshot.right_up,
            right_down: snapshot.right_down,
            pause: snapshot.pause,
            ..TickInput::default()
        };

        self.cursor = CursorIcon::Arrow;
        match self.state.phase {
            GamePhase::Menu => {
                if self.menu.update_highlights(snapshot.pointer) {
                    self.cursor = CursorIcon::Hand;
                }
                match self.menu.clicked(snapshot.pointer, snapshot.clicking) {
                    Some(ButtonId::Start) => input.start = true,
                    Some(ButtonId::Quit) => self.running = false,
                    _ => {}
                }
            }
            GamePhase::GameOver => {
                if self.game_over.update_highlights(snapshot.pointer) {
                    self.cursor = CursorIcon::Hand;
                }
                match self.game_over.clicked(snapshot.pointer, snapshot.clicking) {
                    Some(ButtonId::Restart) => input.restart = true,
                    Some(ButtonId::Menu) => input.to_menu = true,
                    _ => {}
                }
            }
            GamePhase::Playing | GamePhase::Paused => {}
        }
        input
    }

    fn active_screen(&self) -> Option<&Screen> {
        match self.state.phase {
            GamePhase::Menu => Some(&self.menu),
            GamePhase::Paused => Some(&self.paused),
            GamePhase::GameOver => Some(&self.game_over),
            GamePhase::Playing => None,
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
