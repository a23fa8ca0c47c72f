//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - All motion scaled by measured frame time
//! - Stable collision scan order (paddle segments 0..6, left paddle first)
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use clock::FrameClock;
pub use collision::{deflect_off_paddles, LEFT_PADDLE_ANGLES, RIGHT_PADDLE_ANGLES};
pub use rect::Rect;
pub use state::{Ball, Direction, GamePhase, MatchState, Paddle, PlayerSide, WallSide, Walls};
pub use tick::{tick, TickInput};
