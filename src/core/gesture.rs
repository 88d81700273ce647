//! Click-vs-drag gesture discrimination
//!
//! Distinguishes a short click from a press-hold-move drag on the orb
//! window. The state machine is display-free: the caller feeds it press,
//! hold-expiry, pointer-move, and release events and applies the returned
//! window origin itself, so the logic can be tested without a window.

/// 2D point in screen coordinates (logical points).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Current phase of the gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    /// No button held.
    Idle,
    /// Button held, hold threshold not yet expired. A release here is a click.
    Pending { grab: Point },
    /// Hold threshold expired while still pressed; pointer moves drag the window.
    Dragging { grab: Point },
}

/// What a button release means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Released before the hold expired: open the menu, window untouched.
    Click,
    /// Released after dragging: restore the cursor, menu suppressed.
    DragEnd,
}

/// Drag/click state machine for the orb window.
#[derive(Debug, Default)]
pub struct DragGesture {
    state: GestureState,
}

impl Default for GestureState {
    fn default() -> Self {
        Self::Idle
    }
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    /// Button pressed. `grab` is the pointer offset from the window's
    /// top-left corner; it stays fixed under the pointer for the whole drag.
    pub fn press(&mut self, grab: Point) {
        self.state = GestureState::Pending { grab };
    }

    /// The hold threshold elapsed while the button is still down.
    /// Ignored unless a press is pending.
    pub fn hold_expired(&mut self) {
        if let GestureState::Pending { grab } = self.state {
            self.state = GestureState::Dragging { grab };
        }
    }

    /// Pointer moved to `pointer` (screen coordinates). Returns the new
    /// window origin while dragging, `None` otherwise. Movement range is
    /// unbounded; the window may leave the visible screen.
    pub fn pointer_moved(&self, pointer: Point) -> Option<Point> {
        match self.state {
            GestureState::Dragging { grab } => {
                Some(Point::new(pointer.x - grab.x, pointer.y - grab.y))
            }
            _ => None,
        }
    }

    /// Button released. Returns what the release means, or `None` if no
    /// press was in progress.
    pub fn release(&mut self) -> Option<ReleaseOutcome> {
        let outcome = match self.state {
            GestureState::Idle => None,
            GestureState::Pending { .. } => Some(ReleaseOutcome::Click),
            GestureState::Dragging { .. } => Some(ReleaseOutcome::DragEnd),
        };
        self.state = GestureState::Idle;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_release_is_a_click() {
        let mut gesture = DragGesture::new();
        gesture.press(Point::new(10.0, 12.0));
        assert_eq!(gesture.release(), Some(ReleaseOutcome::Click));
        assert_eq!(gesture.state(), GestureState::Idle);
    }

    #[test]
    fn click_never_moves_the_window() {
        let mut gesture = DragGesture::new();
        gesture.press(Point::new(10.0, 12.0));
        // No hold expiry: pointer movement is ignored.
        assert_eq!(gesture.pointer_moved(Point::new(500.0, 500.0)), None);
        assert_eq!(gesture.release(), Some(ReleaseOutcome::Click));
    }

    #[test]
    fn hold_then_move_drags_with_fixed_grab_offset() {
        let mut gesture = DragGesture::new();
        gesture.press(Point::new(20.0, 30.0));
        gesture.hold_expired();
        assert!(gesture.is_dragging());

        let origin = gesture.pointer_moved(Point::new(120.0, 130.0));
        assert_eq!(origin, Some(Point::new(100.0, 100.0)));

        // The same offset applies wherever the pointer goes, even off-screen.
        let origin = gesture.pointer_moved(Point::new(-5.0, 7.0));
        assert_eq!(origin, Some(Point::new(-25.0, -23.0)));
    }

    #[test]
    fn release_after_drag_suppresses_the_menu() {
        let mut gesture = DragGesture::new();
        gesture.press(Point::new(0.0, 0.0));
        gesture.hold_expired();
        gesture.pointer_moved(Point::new(50.0, 50.0));
        assert_eq!(gesture.release(), Some(ReleaseOutcome::DragEnd));
        assert_eq!(gesture.state(), GestureState::Idle);
    }

    #[test]
    fn hold_expiry_after_release_is_ignored() {
        let mut gesture = DragGesture::new();
        gesture.press(Point::new(0.0, 0.0));
        gesture.release();
        gesture.hold_expired();
        assert_eq!(gesture.state(), GestureState::Idle);
        assert_eq!(gesture.release(), None);
    }

    #[test]
    fn repress_after_drag_starts_a_fresh_gesture() {
        let mut gesture = DragGesture::new();
        gesture.press(Point::new(5.0, 5.0));
        gesture.hold_expired();
        gesture.release();

        gesture.press(Point::new(1.0, 2.0));
        assert_eq!(
            gesture.state(),
            GestureState::Pending {
                grab: Point::new(1.0, 2.0)
            }
        );
    }
}
