//! Per-frame simulation update
//!
//! One call advances the match by exactly one frame: commands, then
//! collision resolution, then motion, then scoring and the win check.

use glam::Vec2;

use super::clock::FrameClock;
use super::collision::deflect_off_paddles;
use super::state::{Direction, GamePhase, MatchState, PlayerSide, WallSide};
use crate::consts::*;
use crate::mirror_heading;

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held paddle keys
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
    /// Pause toggle (one-shot)
    pub pause: bool,
    /// Menu "Start" was clicked
    pub start: bool,
    /// Game-over "Restart" was clicked
    pub restart: bool,
    /// Game-over "Menu" was clicked
    pub to_menu: bool,
}

/// Advance the match state by one frame
pub fn tick(state: &mut MatchState, input: &TickInput, clock: &FrameClock) {
    apply_commands(state, input);

    // Nothing moves while paused or after the match has ended
    match state.phase {
        GamePhase::Paused | GamePhase::GameOver => return,
        GamePhase::Menu | GamePhase::Playing => {}
    }

    // Paddle deflection is resolved before motion; on a hit the ball
    // has already been nudged out of the overlap
    if let Some(heading) = deflect_off_paddles(&state.paddles[0], &state.paddles[1], &mut state.ball)
    {
        state.ball.heading = heading;
    }

    if state.walls.touching(&state.ball.rect).is_some() {
        state.ball.heading = mirror_heading(state.ball.heading);
    }

    state.ball.advance(clock.distance_for(state.ball.speed));

    if state.phase == GamePhase::Playing {
        move_paddles(state, input, clock);
        handle_out_of_bounds(state, clock);
        check_win(state);
    }
}

/// Phase transitions driven by one-shot commands
fn apply_commands(state: &mut MatchState, input: &TickInput) {
    match state.phase {
        GamePhase::Menu => {
            if input.start {
                state.serve_layout();
                state.phase = GamePhase::Playing;
                log::info!("match started");
            }
        }
        GamePhase::Playing => {
            if input.pause {
                state.phase = GamePhase::Paused;
                log::debug!("paused");
            }
        }
        GamePhase::Paused => {
            if input.pause {
                state.phase = GamePhase::Playing;
                log::debug!("resumed");
            }
        }
        GamePhase::GameOver => {
            if input.restart {
                state.reset_scores();
                state.serve_layout();
                state.phase = GamePhase::Playing;
                log::info!("match restarted");
            } else if input.to_menu {
                state.reset_scores();
                state.menu_layout();
                state.phase = GamePhase::Menu;
                log::info!("back to menu");
            }
        }
    }
}

/// Wall containment and manual paddle movement.
///
/// A paddle touching a wall is forced one step away from it, and that
/// forced step overrides the player's input for this frame only.
fn move_paddles(state: &mut MatchState, input: &TickInput, clock: &FrameClock) {
    let step = clock.distance_for(PADDLE_SPEED) as i32;

    let mut forced = [false; 2];
    for (i, paddle) in state.paddles.iter_mut().enumerate() {
        if let Some(side) = state.walls.touching_paddle(paddle) {
            let away = match side {
                WallSide::Top => Direction::Down,
                WallSide::Bottom => Direction::Up,
            };
            paddle.shift(away, step);
            forced[i] = true;
        }
    }

    if !forced[0] {
        if input.left_up {
            state.paddles[0].shift(Direction::Up, step);
        }
        if input.left_down {
            state.paddles[0].shift(Direction::Down, step);
        }
    }
    if !forced[1] {
        if input.right_up {
            state.paddles[1].shift(Direction::Up, step);
        }
        if input.right_down {
            state.paddles[1].shift(Direction::Down, step);
        }
    }
}

/// Freeze, score once, and respawn the ball after it leaves the field.
///
/// The scoring lock guarantees exactly one increment per excursion even
/// though the out-of-bounds condition holds for many frames.
fn handle_out_of_bounds(state: &mut MatchState, clock: &FrameClock) {
    let x = state.ball.pos.x;
    let out_left = x < -OUT_OF_BOUNDS_MARGIN;
    let out_right = x > FIELD_WIDTH as f32 + OUT_OF_BOUNDS_MARGIN;
    if !out_left && !out_right {
        return;
    }

    state.ball.speed = 0.0;
    state.respawn_timer += clock.dt_secs;

    if !state.scoring_lock {
        // Exiting past the left edge scores the right player, and
        // vice versa
        let scorer = if out_left {
            PlayerSide::Right
        } else {
            PlayerSide::Left
        };
        state.award_point(scorer);
        state.scoring_lock = true;
    }

    if state.respawn_timer > RESPAWN_DELAY_SECS {
        state.respawn_timer = 0.0;
        state.ball.reposition(MatchState::spawn_point());
        state.ball.speed = BALL_SPEED;
        state.scoring_lock = false;
    }
}

/// End the match once either score reaches the cap
fn check_win(state: &mut MatchState) {
    let winner = if state.score_left == WINNING_SCORE {
        Some(PlayerSide::Left)
    } else if state.score_right == WINNING_SCORE {
        Some(PlayerSide::Right)
    } else {
        None
    };

    if let Some(side) = winner {
        state.winner = Some(side);
        state.phase = GamePhase::GameOver;
        state.ball.speed = 0.0;
        // Park the frozen ball off-field so it cannot sit inside a
        // paddle when the match restarts
        state.ball.reposition(Vec2::new(40.0, -40.0));
        log::info!("game over, {:?} wins", side);
    }
}
