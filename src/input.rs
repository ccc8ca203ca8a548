//! Menu input events
//!
//! Screens only care whether the pointer was pressed and where, so SDL2's
//! event stream is narrowed to [`MenuEvent`] before it reaches them.

use sdl2::event::Event;
use sdl2::rect::Point;

/// Input relevant to a menu screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Any mouse button pressed at (x, y) in window coordinates
    PointerDown { x: i32, y: i32 },
    /// Everything else
    Other,
}

impl MenuEvent {
    /// Position of a pointer press, if this is one
    pub fn pointer_position(&self) -> Option<Point> {
        match *self {
            MenuEvent::PointerDown { x, y } => Some(Point::new(x, y)),
            MenuEvent::Other => None,
        }
    }
}

impl From<&Event> for MenuEvent {
    fn from(event: &Event) -> Self {
        match *event {
            Event::MouseButtonDown { x, y, .. } => MenuEvent::PointerDown { x, y },
            _ => MenuEvent::Other,
        }
    }
}
