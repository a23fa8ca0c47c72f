//! Menu and overlay button model
//!
//! Holds the interactive text elements the external renderer draws and
//! the pointer hit-testing that drives them. Elements live in an
//! explicit ordered list; iteration order is deterministic and
//! load-bearing for both rendering order and hit-test precedence.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Rect;

/// Cursor icon requested for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CursorIcon {
    #[default]
    Arrow,
    /// Shown while hovering an interactive element
    Hand,
}

/// Stable identifier for every text element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonId {
    Title,
    Start,
    Quit,
    PausedLabel,
    Restart,
    Menu,
}

impl ButtonId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonId::Title => "Pong Classic",
            ButtonId::Start => "Start",
            ButtonId::Quit => "Quit",
            ButtonId::PausedLabel => "Paused",
            ButtonId::Restart => "Restart",
            ButtonId::Menu => "Menu",
        }
    }
}

/// One positioned text element, interactive or not
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Button {
    pub rect: Rect,
    /// Non-interactive elements never highlight and never hit-test
    pub interactive: bool,
    /// Set while the pointer hovers the element
    pub highlight: bool,
}

impl Button {
    fn label(rect: Rect) -> Self {
        Self {
            rect,
            interactive: false,
            highlight: false,
        }
    }

    fn clickable(rect: Rect) -> Self {
        Self {
            rect,
            interactive: true,
            highlight: false,
        }
    }
}

/// An ordered collection of buttons for one phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Screen {
    items: Vec<(ButtonId, Button)>,
}

impl Screen {
    /// Title menu: Start and Quit under the title banner
    pub fn menu() -> Self {
        Self {
            items: vec![
                (ButtonId::Title, Button::label(Rect::new(345, 0, 600, 240))),
                (ButtonId::Start, Button::clickable(Rect::new(583, 350, 100, 85))),
                (ButtonId::Quit, Button::clickable(Rect::new(590, 550, 90, 85))),
            ],
        }
    }

    /// Game-over overlay: Restart and Menu side by side
    pub fn game_over() -> Self {
        Self {
            items: vec![
                (
                    ButtonId::Restart,
                    Button::clickable(Rect::new(450, 350, 120, 85)),
                ),
                (ButtonId::Menu, Button::clickable(Rect::new(720, 350, 90, 85))),
            ],
        }
    }

    /// Pause overlay: a single non-interactive label
    pub fn paused() -> Self {
        Self {
            items: vec![(
                ButtonId::PausedLabel,
                Button::label(Rect::new(450, 200, 400, 240)),
            )],
        }
    }

    /// Elements in render order
    pub fn items(&self) -> &[(ButtonId, Button)] {
        &self.items
    }

    /// First interactive element under the pointer, in list order
    pub fn hit_test(&self, pointer: Vec2) -> Option<ButtonId> {
        let (x, y) = (pointer.x as i32, pointer.y as i32);
        self.items
            .iter()
            .find(|(_, b)| b.interactive && b.rect.contains(x, y))
            .map(|(id, _)| *id)
    }

    /// Refresh hover highlights; returns true if anything is hovered
    /// (callers switch to the hand cursor on true)
    pub fn update_highlights(&mut self, pointer: Vec2) -> bool {
        let hovered = self.hit_test(pointer);
        for (id, button) in &mut self.items {
            button.highlight = button.interactive && hovered == Some(*id);
        }
        hovered.is_some()
    }

    /// The element clicked this frame, if any
    pub fn clicked(&self, pointer: Vec2, clicking: bool) -> Option<ButtonId> {
        if clicking { self.hit_test(pointer) } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order_is_deterministic() {
        let screen = Screen::menu();
        let ids: Vec<ButtonId> = screen.items().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![ButtonId::Title, ButtonId::Start, ButtonId::Quit]);
    }

    #[test]
    fn test_title_never_hit_tests() {
        let screen = Screen::menu();
        // Pointer inside the title banner
        assert_eq!(screen.hit_test(Vec2::new(400.0, 100.0)), None);
    }

    #[test]
    fn test_start_button_hit() {
        let screen = Screen::menu();
        assert_eq!(
            screen.hit_test(Vec2::new(600.0, 380.0)),
            Some(ButtonId::Start)
        );
        assert_eq!(screen.hit_test(Vec2::new(10.0, 10.0)), None);
    }

    #[test]
    fn test_highlight_follows_pointer() {
        let mut screen = Screen::menu();
        assert!(screen.update_highlights(Vec2::new(600.0, 380.0)));
        let start = &screen.items()[1].1;
        let quit = &screen.items()[2].1;
        assert!(start.highlight);
        assert!(!quit.highlight);

        assert!(!screen.update_highlights(Vec2::new(0.0, 0.0)));
        assert!(screen.items().iter().all(|(_, b)| !b.highlight));
    }

    #[test]
    fn test_click_requires_clicking_flag() {
        let screen = Screen::game_over();
        let on_restart = Vec2::new(460.0, 380.0);
        assert_eq!(screen.clicked(on_restart, false), None);
        assert_eq!(screen.clicked(on_restart, true), Some(ButtonId::Restart));
    }

    #[test]
    fn test_paused_label_is_inert() {
        let mut screen = Screen::paused();
        assert!(!screen.update_highlights(Vec2::new(500.0, 300.0)));
        assert_eq!(screen.clicked(Vec2::new(500.0, 300.0), true), None);
    }
}
