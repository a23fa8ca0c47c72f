//! Platform boundary
//!
//! The engine never talks to a window, renderer or input device
//! directly. These traits are the seam the real subsystems plug into,
//! and the registry owns the shared handles those subsystems hand out.

use std::fmt;

use glam::Vec2;

use crate::scene::Scene;
use crate::ui::CursorIcon;

/// Discrete input state for one frame, produced by an input collaborator
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    /// Held paddle keys
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
    /// Pause key, edge-triggered by the input source
    pub pause: bool,
    /// Quit requested (escape / window close)
    pub quit: bool,
    /// Pointer position in field coordinates
    pub pointer: Vec2,
    /// Left button went down this frame
    pub clicking: bool,
}

/// Fatal subsystem initialization failure. Reported once; the process
/// exits non-zero, no retry.
#[derive(Debug)]
pub struct InitError {
    pub subsystem: &'static str,
    pub reason: String,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} initialization failed: {}", self.subsystem, self.reason)
    }
}

impl std::error::Error for InitError {}

/// Non-blocking input poll, drained once per frame
pub trait InputSource {
    fn poll(&mut self) -> InputSnapshot;
}

/// Receives the finished scene each frame. Implementations handle
/// their own surface errors; a dropped frame is never fatal.
pub trait FrameSink {
    fn present(&mut self, scene: &Scene, resources: &Registry);
}

/// Opaque handle to a loaded font face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(u32);

/// Opaque handle to a system cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CursorId(u32);

/// Process-scoped owner of shared render resources.
///
/// Fonts and cursors are interned once and live for the engine's
/// lifetime; they are released together when the registry drops at
/// shutdown, never when an individual game object goes away. Lookups
/// iterate in insertion order.
#[derive(Debug, Default)]
pub struct Registry {
    fonts: Vec<(String, FontId)>,
    cursors: Vec<(CursorIcon, CursorId)>,
    next_id: u32,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Handle for a font by name, loading it on first request
    pub fn font(&mut self, name: &str) -> FontId {
        if let Some((_, id)) = self.fonts.iter().find(|(n, _)| n == name) {
            return *id;
        }
        let id = FontId(self.next_id());
        log::debug!("registering font '{name}'");
        self.fonts.push((name.to_owned(), id));
        id
    }

    /// Handle for a system cursor, created on first request
    pub fn cursor(&mut self, icon: CursorIcon) -> CursorId {
        if let Some((_, id)) = self.cursors.iter().find(|(i, _)| *i == icon) {
            return *id;
        }
        let id = CursorId(self.next_id());
        self.cursors.push((icon, id));
        id
    }

    /// Registered fonts in insertion order
    pub fn fonts(&self) -> impl Iterator<Item = (&str, FontId)> {
        self.fonts.iter().map(|(n, id)| (n.as_str(), *id))
    }
}

impl Drop for Registry {
    fn drop(&mut self) {
        log::debug!(
            "releasing {} fonts, {} cursors",
            self.fonts.len(),
            self.cursors.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_interned_once() {
        let mut registry = Registry::new();
        let a = registry.font("joystix");
        let b = registry.font("joystix");
        assert_eq!(a, b);
        assert_eq!(registry.fonts().count(), 1);
    }

    #[test]
    fn test_fonts_iterate_in_insertion_order() {
        let mut registry = Registry::new();
        registry.font("joystix");
        registry.font("fallback");
        let names: Vec<&str> = registry.fonts().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["joystix", "fallback"]);
    }

    #[test]
    fn test_cursor_handles_distinct() {
        let mut registry = Registry::new();
        let arrow = registry.cursor(CursorIcon::Arrow);
        let hand = registry.cursor(CursorIcon::Hand);
        assert_ne!(arrow, hand);
        assert_eq!(registry.cursor(CursorIcon::Arrow), arrow);
    }

    #[test]
    fn test_init_error_names_subsystem() {
        let err = InitError {
            subsystem: "font",
            reason: "joystix.ttf not found".into(),
        };
        assert!(err.to_string().contains("font initialization failed"));
    }
}
