//! Match state and core simulation types
//!
//! Everything the frame loop mutates lives in `MatchState`; there are
//! no loose phase flags or timers outside it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title menu showing; ball bounces as an attract backdrop
    Menu,
    /// Active gameplay
    Playing,
    /// Game is paused (no state reset on resume)
    Paused,
    /// A player reached the winning score
    GameOver,
}

/// Which player a paddle or score belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerSide {
    Left,
    Right,
}

impl PlayerSide {
    pub fn opponent(self) -> Self {
        match self {
            PlayerSide::Left => PlayerSide::Right,
            PlayerSide::Right => PlayerSide::Left,
        }
    }
}

/// Vertical movement direction for a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

/// Which boundary wall was touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallSide {
    Top,
    Bottom,
}

/// A paddle: 7 contiguous equal squares stacked vertically.
///
/// Segment 3 is the origin; every other segment is derived from it, so
/// contiguity survives any sequence of moves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    segments: [Rect; SEGMENT_COUNT],
    size: i32,
}

impl Paddle {
    /// Build a paddle with its center segment at `center`
    pub fn new(center: (i32, i32)) -> Self {
        let size = SEGMENT_SIZE;
        let mut paddle = Self {
            segments: [Rect::new(0, 0, size, size); SEGMENT_COUNT],
            size,
        };
        paddle.reposition(center);
        paddle
    }

    /// Set the center segment and recompute all others from it.
    /// Used on restart, never during gameplay, so no incremental drift
    /// can accumulate.
    pub fn reposition(&mut self, center: (i32, i32)) {
        self.segments[3].x = center.0;
        self.segments[3].y = center.1;
        for i in (0..3).rev() {
            self.segments[i].x = self.segments[i + 1].x;
            self.segments[i].y = self.segments[i + 1].y - self.size;
        }
        for i in 4..SEGMENT_COUNT {
            self.segments[i].x = self.segments[i - 1].x;
            self.segments[i].y = self.segments[i - 1].y + self.size;
        }
    }

    /// Translate every segment vertically by `distance`
    pub fn shift(&mut self, direction: Direction, distance: i32) {
        if distance == 0 {
            return;
        }
        let dy = match direction {
            Direction::Up => -distance,
            Direction::Down => distance,
        };
        for segment in &mut self.segments {
            segment.y += dy;
        }
    }

    /// Lowest-index segment intersecting `rect`, scanning 0..6.
    /// The fixed ascending scan order is the tie-break that picks one
    /// outgoing angle when more than one segment overlaps.
    pub fn hit_segment(&self, rect: &Rect) -> Option<usize> {
        self.segments.iter().position(|s| s.intersects(rect))
    }

    pub fn segments(&self) -> &[Rect; SEGMENT_COUNT] {
        &self.segments
    }

    pub fn segment_size(&self) -> i32 {
        self.size
    }
}

/// The two fixed boundary strips spanning the full field width
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Walls {
    bounds: [Rect; 2],
}

impl Default for Walls {
    fn default() -> Self {
        Self::new()
    }
}

impl Walls {
    pub fn new() -> Self {
        Self {
            bounds: [
                Rect::new(0, 0, FIELD_WIDTH, WALL_THICKNESS),
                Rect::new(
                    0,
                    FIELD_HEIGHT - WALL_THICKNESS,
                    FIELD_WIDTH,
                    WALL_THICKNESS,
                ),
            ],
        }
    }

    /// Which wall, if any, intersects `rect` (top checked first)
    pub fn touching(&self, rect: &Rect) -> Option<WallSide> {
        if self.bounds[0].intersects(rect) {
            Some(WallSide::Top)
        } else if self.bounds[1].intersects(rect) {
            Some(WallSide::Bottom)
        } else {
            None
        }
    }

    /// Which wall, if any, intersects any segment of `paddle`
    pub fn touching_paddle(&self, paddle: &Paddle) -> Option<WallSide> {
        for segment in paddle.segments() {
            if self.bounds[0].intersects(segment) {
                return Some(WallSide::Top);
            }
            if self.bounds[1].intersects(segment) {
                return Some(WallSide::Bottom);
            }
        }
        None
    }

    pub fn bounds(&self) -> &[Rect; 2] {
        &self.bounds
    }
}

/// The ball: continuous position is authoritative, the integer rect is
/// derived by truncation each move and never fed back into position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub rect: Rect,
    /// Direction of travel in degrees, [0, 360)
    pub heading: f32,
    /// Nominal speed units; forced to 0 while frozen
    pub speed: f32,
}

impl Ball {
    pub fn new(pos: Vec2, heading: f32) -> Self {
        let mut ball = Self {
            pos,
            rect: Rect::new(0, 0, BALL_SIZE, BALL_SIZE),
            heading,
            speed: BALL_SPEED,
        };
        ball.sync_rect();
        ball
    }

    fn sync_rect(&mut self) {
        self.rect.x = self.pos.x as i32;
        self.rect.y = self.pos.y as i32;
    }

    /// Move `distance` pixels along the current heading
    pub fn advance(&mut self, distance: f32) {
        self.pos += crate::heading_vector(self.heading) * distance;
        self.sync_rect();
    }

    /// Hard-set the position without touching the heading
    pub fn reposition(&mut self, pos: Vec2) {
        self.pos = pos;
        self.sync_rect();
    }
}

/// Complete match state, owned and mutated only by the frame loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub phase: GamePhase,
    pub score_left: u8,
    pub score_right: u8,
    /// Guards against double-counting one out-of-bounds excursion
    pub scoring_lock: bool,
    /// Seconds accumulated since the ball left the field
    pub respawn_timer: f32,
    pub winner: Option<PlayerSide>,
    /// Left paddle at index 0, right at index 1
    pub paddles: [Paddle; 2],
    pub walls: Walls,
    pub ball: Ball,
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchState {
    /// Fresh state in the menu layout
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Menu,
            score_left: 0,
            score_right: 0,
            scoring_lock: false,
            respawn_timer: 0.0,
            winner: None,
            paddles: [Paddle::new(LEFT_PADDLE_START), Paddle::new(RIGHT_PADDLE_START)],
            walls: Walls::new(),
            ball: Ball::new(Vec2::new(MENU_BALL_START.0, MENU_BALL_START.1), 180.0),
        }
    }

    /// Ball spawn point: horizontal center, rect roughly centered on
    /// the vertical midline
    pub fn spawn_point() -> Vec2 {
        Vec2::new(
            (FIELD_WIDTH / 2) as f32,
            (FIELD_HEIGHT / 2 - BALL_SIZE) as f32,
        )
    }

    /// Serve layout used when leaving the menu or restarting a match
    pub fn serve_layout(&mut self) {
        self.paddles[0].reposition(LEFT_PADDLE_START);
        self.paddles[1].reposition(RIGHT_PADDLE_START);
        self.ball.reposition(Self::spawn_point());
        self.ball.heading = 1.0;
        self.ball.speed = BALL_SPEED;
        self.scoring_lock = false;
        self.respawn_timer = 0.0;
        self.winner = None;
    }

    /// Menu layout: ball drifting in from the left as attract backdrop
    pub fn menu_layout(&mut self) {
        self.paddles[0].reposition(LEFT_PADDLE_START);
        self.paddles[1].reposition(RIGHT_PADDLE_START);
        self.ball
            .reposition(Vec2::new(MENU_BALL_START.0, MENU_BALL_START.1));
        self.ball.heading = 180.0;
        self.ball.speed = BALL_SPEED;
        self.scoring_lock = false;
        self.respawn_timer = 0.0;
        self.winner = None;
    }

    pub fn reset_scores(&mut self) {
        self.score_left = 0;
        self.score_right = 0;
    }

    /// Increment one side's score, clamped at the winning score
    pub fn award_point(&mut self, side: PlayerSide) {
        let score = match side {
            PlayerSide::Left => &mut self.score_left,
            PlayerSide::Right => &mut self.score_right,
        };
        *score = (*score + 1).min(WINNING_SCORE);
        log::info!("point to {:?}: {} - {}", side, self.score_left, self.score_right);
    }

    pub fn score_of(&self, side: PlayerSide) -> u8 {
        match side {
            PlayerSide::Left => self.score_left,
            PlayerSide::Right => self.score_right,
        }
    }
}
