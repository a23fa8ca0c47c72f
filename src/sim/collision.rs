//! Collision resolution: paddle deflection angles and wall bounces
//!
//! Each paddle segment maps to one fixed outgoing heading. There is no
//! "just collided" flag anywhere; instead a hit displaces the ball
//! horizontally out of the overlap so the next frame's scan cannot
//! re-detect the same contact and pin the ball to a paddle edge.

use glam::Vec2;

use super::state::{Ball, Paddle, PlayerSide};
use crate::consts::PADDLE_NUDGE;

/// Outgoing heading per left-paddle segment index, top (0) to bottom (6)
pub const LEFT_PADDLE_ANGLES: [f32; 7] = [300.0, 315.0, 330.0, 0.0, 30.0, 45.0, 60.0];

/// Outgoing heading per right-paddle segment index, top (0) to bottom (6)
pub const RIGHT_PADDLE_ANGLES: [f32; 7] = [240.0, 225.0, 210.0, 180.0, 150.0, 135.0, 120.0];

/// Heading for a hit on the given side and segment index
pub fn deflection_angle(side: PlayerSide, segment: usize) -> f32 {
    match side {
        PlayerSide::Left => LEFT_PADDLE_ANGLES[segment],
        PlayerSide::Right => RIGHT_PADDLE_ANGLES[segment],
    }
}

/// Test the ball against both paddles and return the new heading if
/// either was hit, nudging the ball out of the contact.
///
/// Tie-break rule: the left paddle is checked first; on a left hit the
/// right paddle is not consulted at all. Only degenerate extreme-speed
/// frames can ever hit both.
pub fn deflect_off_paddles(left: &Paddle, right: &Paddle, ball: &mut Ball) -> Option<f32> {
    if let Some(segment) = left.hit_segment(&ball.rect) {
        nudge(ball, PADDLE_NUDGE);
        return Some(deflection_angle(PlayerSide::Left, segment));
    }
    if let Some(segment) = right.hit_segment(&ball.rect) {
        nudge(ball, -PADDLE_NUDGE);
        return Some(deflection_angle(PlayerSide::Right, segment));
    }
    None
}

/// Displace the ball horizontally, away from the paddle it touched
fn nudge(ball: &mut Ball, dx: f32) {
    let pos = Vec2::new(ball.pos.x + dx, ball.pos.y);
    ball.reposition(pos);
}
