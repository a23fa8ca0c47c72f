//! Engine integration tests: full-tick scenarios and property checks

use glam::Vec2;
use proptest::prelude::*;

use pong_classic::consts::*;
use pong_classic::sim::{
    tick, Direction, FrameClock, GamePhase, MatchState, Paddle, PlayerSide, TickInput,
    LEFT_PADDLE_ANGLES, RIGHT_PADDLE_ANGLES,
};
use pong_classic::{heading_vector, mirror_heading};

/// 10 ms frames: ball covers 10 px/frame at its nominal speed
fn frame_clock() -> FrameClock {
    FrameClock::with_dt(0.01)
}

fn playing_state() -> MatchState {
    let mut state = MatchState::new();
    state.serve_layout();
    state.phase = GamePhase::Playing;
    state
}

/// Park both paddles below the ball's travel line
fn clear_paddles(state: &mut MatchState) {
    state.paddles[0].reposition((LEFT_PADDLE_START.0, 600));
    state.paddles[1].reposition((RIGHT_PADDLE_START.0, 600));
}

#[test]
fn center_segment_hit_sets_flat_heading_and_nudges() {
    let mut state = playing_state();
    // Ball overlapping the left paddle's center segment
    state.ball.reposition(Vec2::new(15.0, 290.0));
    state.ball.heading = 180.0;

    tick(&mut state, &TickInput::default(), &frame_clock());

    assert!((state.ball.heading - 0.0).abs() < 1e-4);
    // Nudged +10 out of the overlap, then one 10 px step along 0°
    assert!((state.ball.pos.x - 35.0).abs() < 1e-3);
}

#[test]
fn every_left_segment_maps_to_its_table_angle() {
    for segment in 0..SEGMENT_COUNT {
        let mut state = playing_state();
        let seg_rect = state.paddles[0].segments()[segment];
        state
            .ball
            .reposition(Vec2::new(seg_rect.x as f32, seg_rect.y as f32));

        tick(&mut state, &TickInput::default(), &frame_clock());
        assert!(
            (state.ball.heading - LEFT_PADDLE_ANGLES[segment]).abs() < 1e-4,
            "segment {segment}"
        );
    }
}

#[test]
fn every_right_segment_maps_to_its_table_angle() {
    for segment in 0..SEGMENT_COUNT {
        let mut state = playing_state();
        let seg_rect = state.paddles[1].segments()[segment];
        state
            .ball
            .reposition(Vec2::new(seg_rect.x as f32, seg_rect.y as f32));

        tick(&mut state, &TickInput::default(), &frame_clock());
        assert!(
            (state.ball.heading - RIGHT_PADDLE_ANGLES[segment]).abs() < 1e-4,
            "segment {segment}"
        );
    }
}

#[test]
fn out_of_bounds_excursion_scores_once_then_respawns() {
    let mut state = playing_state();
    clear_paddles(&mut state);
    state.ball.reposition(Vec2::new(60.0, 450.0));
    state.ball.heading = 180.0;

    let clock = frame_clock();
    // Drive the ball off the left edge
    let mut lock_transitions = 0;
    let mut was_locked = false;
    for _ in 0..50 {
        tick(&mut state, &TickInput::default(), &clock);
        if state.scoring_lock && !was_locked {
            lock_transitions += 1;
        }
        was_locked = state.scoring_lock;
    }
    assert_eq!(lock_transitions, 1);
    assert_eq!(state.score_right, 1);
    assert_eq!(state.score_left, 0);
    assert!((state.ball.speed - 0.0).abs() < f32::EPSILON);

    // Accumulate past the 2 s respawn delay
    let slow = FrameClock::with_dt(0.5);
    for _ in 0..5 {
        tick(&mut state, &TickInput::default(), &slow);
    }
    assert!(!state.scoring_lock);
    assert!((state.ball.speed - BALL_SPEED).abs() < f32::EPSILON);
    assert!(state.ball.pos.x > 0.0 && state.ball.pos.x < FIELD_WIDTH as f32);
}

#[test]
fn full_match_scores_ten_excursions_then_ends() {
    let mut state = playing_state();
    clear_paddles(&mut state);
    state.ball.reposition(Vec2::new(640.0, 450.0));
    state.ball.heading = 0.0; // straight at the right edge

    // Quarter-second frames: fast excursions and fast respawns
    let clock = FrameClock::with_dt(0.25);
    let mut excursions = 0;
    let mut was_locked = false;
    let mut frames = 0;
    while state.phase == GamePhase::Playing {
        tick(&mut state, &TickInput::default(), &clock);
        if state.scoring_lock && !was_locked {
            excursions += 1;
        }
        was_locked = state.scoring_lock;
        frames += 1;
        assert!(frames < 10_000, "match never ended");
        // Respawn re-centers the ball but keeps heading 0, so every
        // excursion exits right and scores the left player
        assert!(state.score_left <= WINNING_SCORE);
        assert_eq!(state.score_right, 0);
    }

    assert_eq!(excursions, WINNING_SCORE as u32);
    assert_eq!(state.score_left, WINNING_SCORE);
    assert_eq!(state.phase, GamePhase::GameOver);
    assert_eq!(state.winner, Some(PlayerSide::Left));
}

#[test]
fn game_over_freezes_until_restart() {
    let mut state = playing_state();
    clear_paddles(&mut state);
    state.score_left = WINNING_SCORE - 1;
    state.ball.reposition(Vec2::new((FIELD_WIDTH + 30) as f32, 450.0));
    state.ball.heading = 0.0;

    let clock = frame_clock();
    tick(&mut state, &TickInput::default(), &clock);
    assert_eq!(state.phase, GamePhase::GameOver);

    // Held keys and elapsed time change nothing
    let held = TickInput {
        left_up: true,
        right_up: true,
        ..TickInput::default()
    };
    let ball_pos = state.ball.pos;
    for _ in 0..10 {
        tick(&mut state, &held, &FrameClock::with_dt(0.5));
    }
    assert_eq!(state.ball.pos, ball_pos);
    assert!((state.ball.speed - 0.0).abs() < f32::EPSILON);

    // Restart thaws everything
    let restart = TickInput {
        restart: true,
        ..TickInput::default()
    };
    tick(&mut state, &restart, &clock);
    assert_eq!(state.phase, GamePhase::Playing);
    assert_eq!(state.score_left, 0);
    assert!((state.ball.speed - BALL_SPEED).abs() < f32::EPSILON);
}

proptest! {
    /// Wall reflection preserves the horizontal velocity component and
    /// flips the vertical one, for any heading
    #[test]
    fn wall_mirror_is_elastic_reflection(heading in 0.0f32..360.0) {
        let mirrored = mirror_heading(heading);
        prop_assert!((0.0..360.0).contains(&mirrored));

        let v = heading_vector(heading);
        let m = heading_vector(mirrored);
        prop_assert!((v.x - m.x).abs() < 1e-4);
        prop_assert!((v.y + m.y).abs() < 1e-4);
    }

    /// Mirroring twice returns the original heading
    #[test]
    fn wall_mirror_is_involution(heading in 0.0f32..360.0) {
        let twice = mirror_heading(mirror_heading(heading));
        let diff = (twice - heading).abs().min(360.0 - (twice - heading).abs());
        prop_assert!(diff < 1e-3);
    }

    /// Doubling dt doubles the distance for any speed unit
    #[test]
    fn distance_is_linear_in_dt(dt in 1e-4f32..0.1, speed in 0.0f32..20.0) {
        let clock = FrameClock::with_dt(dt);
        let doubled = FrameClock::with_dt(dt * 2.0);
        let d1 = clock.distance_for(speed);
        let d2 = doubled.distance_for(speed);
        prop_assert!((d2 - 2.0 * d1).abs() < d1.abs() * 1e-4 + 1e-6);
    }

    /// Segments stay contiguous and vertically aligned after any
    /// sequence of moves
    #[test]
    fn paddle_contiguity_survives_any_move_sequence(
        moves in prop::collection::vec((any::<bool>(), 0i32..50), 0..40)
    ) {
        let mut paddle = Paddle::new(LEFT_PADDLE_START);
        for (up, distance) in moves {
            let dir = if up { Direction::Up } else { Direction::Down };
            paddle.shift(dir, distance);
        }
        let segs = paddle.segments();
        for i in 1..SEGMENT_COUNT {
            prop_assert_eq!(segs[i].x, segs[i - 1].x);
            prop_assert_eq!(segs[i].y - segs[i - 1].y, SEGMENT_SIZE);
        }
    }
}
