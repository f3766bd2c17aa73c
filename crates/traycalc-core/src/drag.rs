//! Pointer dragging of the calculator pop-up.
//!
//! A [`DragSession`] exists only between a pointer-down on the panel and
//! the matching pointer-up. The controller owns it; hiding the panel
//! cancels it.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Cursor affordance shown over the panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CursorStyle {
    /// Idle: the panel can be grabbed.
    #[default]
    Grab,
    /// A drag is in progress.
    Grabbing,
}

/// Ephemeral state of an active drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer position minus panel position at pointer-down.
    pub start_offset: Vec2,
}

impl DragSession {
    /// Start a session for a pointer pressed at `pointer` over a panel at `position`.
    pub fn begin(pointer: Point, position: Point) -> Self {
        Self {
            start_offset: pointer - position,
        }
    }

    /// Panel position that keeps the grab offset under `pointer`.
    pub fn position_for(&self, pointer: Point) -> Point {
        pointer - self.start_offset
    }
}

/// Translates pointer down/move/up into panel positions.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    session: Option<DragSession>,
    cursor: CursorStyle,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag session is active.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn cursor(&self) -> CursorStyle {
        self.cursor
    }

    /// Begin dragging a panel currently at `position`.
    pub fn pointer_down(&mut self, pointer: Point, position: Point) {
        self.session = Some(DragSession::begin(pointer, position));
        self.cursor = CursorStyle::Grabbing;
    }

    /// New panel position for a pointer move, or `None` when not dragging.
    pub fn pointer_move(&self, pointer: Point) -> Option<Point> {
        self.session.map(|session| session.position_for(pointer))
    }

    /// End the drag.
    pub fn pointer_up(&mut self) {
        self.session = None;
        self.cursor = CursorStyle::Grab;
    }

    /// Drop any session without a pointer-up (panel hidden or torn down).
    pub fn cancel(&mut self) {
        if self.session.take().is_some() {
            log::debug!("Drag session cancelled");
        }
        self.cursor = CursorStyle::Grab;
    }
}

/// CSS-style translation for a panel at `position`.
pub fn translate_css(position: Point) -> String {
    format!("translate({}px, {}px)", position.x, position.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_moves_by_pointer_delta() {
        let mut drag = DragController::new();
        drag.pointer_down(Point::new(100.0, 100.0), Point::ZERO);
        assert!(drag.is_dragging());
        assert_eq!(drag.cursor(), CursorStyle::Grabbing);

        let position = drag.pointer_move(Point::new(150.0, 120.0)).unwrap();
        assert!((position.x - 50.0).abs() < f64::EPSILON);
        assert!((position.y - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_drag_keeps_grab_offset() {
        let mut drag = DragController::new();
        // Panel already moved to (50, 20); grab it 10px inside
        drag.pointer_down(Point::new(60.0, 30.0), Point::new(50.0, 20.0));
        assert_eq!(drag.session().unwrap().start_offset, Vec2::new(10.0, 10.0));
        assert_eq!(drag.pointer_move(Point::new(70.0, 70.0)), Some(Point::new(60.0, 60.0)));
    }

    #[test]
    fn test_move_before_down_ignored() {
        let drag = DragController::new();
        assert_eq!(drag.pointer_move(Point::new(150.0, 120.0)), None);
    }

    #[test]
    fn test_move_after_up_ignored() {
        let mut drag = DragController::new();
        drag.pointer_down(Point::new(100.0, 100.0), Point::ZERO);
        drag.pointer_up();
        assert!(!drag.is_dragging());
        assert_eq!(drag.cursor(), CursorStyle::Grab);
        assert_eq!(drag.pointer_move(Point::new(150.0, 120.0)), None);
    }

    #[test]
    fn test_cancel_discards_session() {
        let mut drag = DragController::new();
        drag.pointer_down(Point::new(100.0, 100.0), Point::ZERO);
        drag.cancel();
        assert!(drag.session().is_none());
        assert_eq!(drag.pointer_move(Point::new(150.0, 120.0)), None);
    }

    #[test]
    fn test_translate_css() {
        assert_eq!(translate_css(Point::new(50.0, 20.0)), "translate(50px, 20px)");
        assert_eq!(translate_css(Point::new(-3.5, 0.0)), "translate(-3.5px, 0px)");
    }
}
