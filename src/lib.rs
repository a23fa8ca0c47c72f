//! Pong Classic - a two-player paddle-and-ball arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (clock, collisions, match state)
//! - `ui`: Menu/button model with pointer hit-testing
//! - `scene`: Render-output snapshot handed to an external renderer
//! - `platform`: Input/renderer boundary traits and the resource registry
//! - `app`: Single-threaded frame-loop driver

pub mod app;
pub mod platform;
pub mod scene;
pub mod sim;
pub mod ui;

pub use sim::{FrameClock, GamePhase, MatchState, TickInput};

/// Game configuration constants
pub mod consts {
    /// Play-field dimensions
    pub const FIELD_WIDTH: i32 = 1280;
    pub const FIELD_HEIGHT: i32 = 720;

    /// Side length of one paddle segment
    pub const SEGMENT_SIZE: i32 = 17;
    /// Number of segments in a paddle body
    pub const SEGMENT_COUNT: usize = 7;

    /// Wall strip thickness (top and bottom)
    pub const WALL_THICKNESS: i32 = 20;

    /// Ball collision square side length
    pub const BALL_SIZE: i32 = 20;

    /// Nominal speed units, scaled by `FrameClock::distance_for`
    pub const PADDLE_SPEED: f32 = 6.0;
    pub const BALL_SPEED: f32 = 10.0;

    /// Horizontal separation nudge applied on a paddle hit
    pub const PADDLE_NUDGE: f32 = 10.0;

    /// How far past the field edge the ball must travel to count as out
    pub const OUT_OF_BOUNDS_MARGIN: f32 = 20.0;
    /// Seconds the ball stays frozen off-field before respawning
    pub const RESPAWN_DELAY_SECS: f32 = 2.0;

    /// Score that ends the match
    pub const WINNING_SCORE: u8 = 10;

    /// Left paddle center-segment start position
    pub const LEFT_PADDLE_START: (i32, i32) = (20, 290);
    /// Right paddle center-segment start position
    pub const RIGHT_PADDLE_START: (i32, i32) = (1245, 290);
    /// Ball position while the menu is showing
    pub const MENU_BALL_START: (f32, f32) = (60.0, 290.0);

    /// End-of-frame delay in milliseconds (frame-rate limiting)
    pub const FRAME_DELAY_MS: u64 = 10;
}

/// Normalize a heading in degrees to [0, 360)
#[inline]
pub fn normalize_heading(heading: f32) -> f32 {
    heading.rem_euclid(360.0)
}

/// Mirror a heading off a horizontal surface: flips the vertical
/// component, preserves the horizontal one.
#[inline]
pub fn mirror_heading(heading: f32) -> f32 {
    normalize_heading(360.0 - heading)
}

/// Unit displacement vector for a heading in degrees
#[inline]
pub fn heading_vector(heading: f32) -> glam::Vec2 {
    let radians = heading.to_radians();
    glam::Vec2::new(radians.cos(), radians.sin())
}
