//! Render-output snapshot
//!
//! Everything the external renderer needs for one frame, flattened to
//! plain data: rectangles, scores, highlight flags, cursor icon. The
//! renderer owns colors, fonts and textures; nothing here touches them.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{GamePhase, MatchState, PlayerSide, Rect};
use crate::ui::{ButtonId, CursorIcon, Screen};

/// One text element to draw, in render order
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TextSprite {
    pub id: ButtonId,
    pub rect: Rect,
    /// Draw the hover outline around this element
    pub highlight: bool,
}

/// Complete drawable state for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub phase: GamePhase,
    /// Left paddle segments at index 0, right at index 1
    pub paddles: [[Rect; SEGMENT_COUNT]; 2],
    pub ball: Rect,
    pub walls: [Rect; 2],
    /// Center-line divider squares, top to bottom
    pub divider: Vec<Rect>,
    pub scores: (u8, u8),
    /// Whether the divider and score digits are drawn this frame
    pub show_board: bool,
    /// Text elements in render order with their highlight flags
    pub text: Vec<TextSprite>,
    pub winner: Option<PlayerSide>,
    pub cursor: CursorIcon,
}

impl Scene {
    /// Snapshot the match plus the active overlay screen
    pub fn compose(state: &MatchState, screen: Option<&Screen>, cursor: CursorIcon) -> Self {
        let text = screen
            .map(|s| {
                s.items()
                    .iter()
                    .map(|(id, b)| TextSprite {
                        id: *id,
                        rect: b.rect,
                        highlight: b.highlight,
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            phase: state.phase,
            paddles: [*state.paddles[0].segments(), *state.paddles[1].segments()],
            ball: state.ball.rect,
            walls: *state.walls.bounds(),
            divider: Self::divider_rects(),
            scores: (state.score_left, state.score_right),
            show_board: matches!(state.phase, GamePhase::Playing),
            text,
            winner: state.winner,
            cursor,
        }
    }

    /// Dashed center line: one square every two square-heights
    fn divider_rects() -> Vec<Rect> {
        let size = 20;
        let x = FIELD_WIDTH / 2 - 2;
        let mut rects = Vec::new();
        let mut y = 0;
        while y < FIELD_HEIGHT - 2 * size {
            y += size * 2;
            rects.push(Rect::new(x, y - size, size, size));
        }
        rects
    }
}
