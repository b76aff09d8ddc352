//! Pointer-gesture controller.
//!
//! Translates one continuous press/move/release gesture on a titlebar or
//! resize handle into a stream of discrete `Focus`/`Move`/`Resize` actions
//! for the reducer. The controller itself is an explicit state machine
//! holding only the minimal per-gesture context; it never touches
//! [`SessionState`](crate::model::SessionState) directly.

use serde::{Deserialize, Serialize};

use crate::model::{PointerPosition, ResizeEdge, WindowId, WindowRecord, WindowRect};
use crate::reducer::{SessionAction, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Context captured when a drag-to-move gesture starts.
pub struct DragContext {
    pub window_id: WindowId,
    /// Pointer offset from the window's top-left at press time, so the grab
    /// point stays under the cursor for the whole gesture.
    pub grab_offset: PointerPosition,
    /// Desktop-surface origin in client coordinates at press time.
    pub origin: PointerPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Context captured when an edge/corner resize gesture starts.
pub struct ResizeContext {
    pub window_id: WindowId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
/// Gesture lifecycle states; at most one gesture is live per session.
pub enum Gesture {
    #[default]
    Idle,
    Dragging(DragContext),
    Resizing(ResizeContext),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
/// The session's single pointer-gesture state machine.
pub struct PointerController {
    gesture: Gesture,
}

impl PointerController {
    /// Current gesture state.
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Whether a gesture is in flight.
    pub fn is_active(&self) -> bool {
        !matches!(self.gesture, Gesture::Idle)
    }

    /// Starts a drag-to-move gesture from a titlebar press.
    ///
    /// Maximized windows do not move; the press is ignored. Returns the
    /// `Focus` action that every gesture begins with.
    pub fn press_titlebar(
        &mut self,
        window: &WindowRecord,
        pointer: PointerPosition,
        origin: PointerPosition,
    ) -> Option<SessionAction> {
        if window.maximized {
            return None;
        }
        self.gesture = Gesture::Dragging(DragContext {
            window_id: window.id,
            grab_offset: PointerPosition {
                x: pointer.x - origin.x - window.rect.x,
                y: pointer.y - origin.y - window.rect.y,
            },
            origin,
        });
        Some(SessionAction::Focus {
            window_id: window.id,
        })
    }

    /// Starts an edge/corner resize gesture from a handle press.
    pub fn press_handle(
        &mut self,
        window: &WindowRecord,
        edge: ResizeEdge,
        pointer: PointerPosition,
    ) -> Option<SessionAction> {
        if window.maximized {
            return None;
        }
        self.gesture = Gesture::Resizing(ResizeContext {
            window_id: window.id,
            edge,
            pointer_start: pointer,
            rect_start: window.rect,
        });
        Some(SessionAction::Focus {
            window_id: window.id,
        })
    }

    /// Produces the transition for one pointer-move sample, if a gesture is
    /// live.
    pub fn pointer_moved(&self, pointer: PointerPosition) -> Option<SessionAction> {
        match &self.gesture {
            Gesture::Idle => None,
            Gesture::Dragging(drag) => Some(SessionAction::Move {
                window_id: drag.window_id,
                x: pointer.x - drag.origin.x - drag.grab_offset.x,
                y: pointer.y - drag.origin.y - drag.grab_offset.y,
            }),
            Gesture::Resizing(resize) => Some(resize_sample(resize, pointer)),
        }
    }

    /// Tears the gesture down. Release fires no transition of its own and is
    /// safe to call while idle, so pointer-up handlers can invoke it
    /// unconditionally.
    pub fn release(&mut self) {
        self.gesture = Gesture::Idle;
    }
}

fn resize_sample(resize: &ResizeContext, pointer: PointerPosition) -> SessionAction {
    let dx = pointer.x - resize.pointer_start.x;
    let dy = pointer.y - resize.pointer_start.y;
    let start = resize.rect_start;
    let edge = resize.edge;

    let mut x = start.x;
    let mut y = start.y;
    let mut w = start.w;
    let mut h = start.h;

    if edge.grows_east() {
        w = start.w + dx;
    }
    if edge.grows_west() {
        w = start.w - dx;
        x = start.x + dx;
    }
    if edge.grows_south() {
        h = start.h + dy;
    }
    if edge.grows_north() {
        h = start.h - dy;
        y = start.y + dy;
    }

    // Clamping must never move the opposite edge: when a west/north drag
    // undershoots the floor, shift the origin back by the shortfall.
    if w < MIN_WINDOW_WIDTH {
        if edge.grows_west() {
            x += w - MIN_WINDOW_WIDTH;
        }
        w = MIN_WINDOW_WIDTH;
    }
    if h < MIN_WINDOW_HEIGHT {
        if edge.grows_north() {
            y += h - MIN_WINDOW_HEIGHT;
        }
        h = MIN_WINDOW_HEIGHT;
    }

    SessionAction::Resize {
        window_id: resize.window_id,
        w,
        h,
        x: Some(x),
        y: Some(y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use desk_app_contract::ApplicationId;
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    fn window(rect: WindowRect) -> WindowRecord {
        WindowRecord {
            id: WindowId(1),
            app_id: ApplicationId::new("notes"),
            title: "Notes".to_string(),
            rect,
            minimized: false,
            maximized: false,
            stack_order: 1001,
            payload: Value::Null,
        }
    }

    fn at(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    #[test]
    fn titlebar_press_focuses_and_tracks_the_grab_point() {
        let mut controller = PointerController::default();
        let win = window(WindowRect {
            x: 100,
            y: 50,
            w: 300,
            h: 200,
        });

        let action = controller.press_titlebar(&win, at(140, 60), at(0, 0));
        assert_eq!(
            action,
            Some(SessionAction::Focus {
                window_id: WindowId(1)
            })
        );
        assert!(controller.is_active());

        // Pointer moved 25 right, 40 down: the window follows exactly.
        let action = controller.pointer_moved(at(165, 100));
        assert_eq!(
            action,
            Some(SessionAction::Move {
                window_id: WindowId(1),
                x: 125,
                y: 90,
            })
        );
    }

    #[test]
    fn drag_positions_are_relative_to_the_surface_origin() {
        let mut controller = PointerController::default();
        let win = window(WindowRect {
            x: 10,
            y: 10,
            w: 300,
            h: 200,
        });

        controller.press_titlebar(&win, at(30, 30), at(8, 12));
        let action = controller.pointer_moved(at(30, 30));
        // No movement yet: the window stays where it was.
        assert_eq!(
            action,
            Some(SessionAction::Move {
                window_id: WindowId(1),
                x: 10,
                y: 10,
            })
        );
    }

    #[test]
    fn maximized_windows_refuse_move_and_resize_gestures() {
        let mut controller = PointerController::default();
        let mut win = window(WindowRect::default());
        win.maximized = true;

        assert_eq!(controller.press_titlebar(&win, at(0, 0), at(0, 0)), None);
        assert_eq!(
            controller.press_handle(&win, ResizeEdge::SouthEast, at(0, 0)),
            None
        );
        assert!(!controller.is_active());
    }

    #[test]
    fn east_resize_grows_width_only() {
        let mut controller = PointerController::default();
        let win = window(WindowRect {
            x: 100,
            y: 100,
            w: 300,
            h: 300,
        });
        controller.press_handle(&win, ResizeEdge::East, at(400, 250));

        let action = controller.pointer_moved(at(460, 300));
        assert_eq!(
            action,
            Some(SessionAction::Resize {
                window_id: WindowId(1),
                w: 360,
                h: 300,
                x: Some(100),
                y: Some(100),
            })
        );
    }

    #[test]
    fn west_resize_keeps_the_east_edge_pinned_through_the_clamp() {
        let mut controller = PointerController::default();
        let start = WindowRect {
            x: 100,
            y: 100,
            w: 300,
            h: 300,
        };
        let win = window(start);
        controller.press_handle(&win, ResizeEdge::West, at(100, 200));

        // Shrink past the floor: dx = 250 gives an unclamped width of 50.
        let action = controller.pointer_moved(at(350, 200));
        let Some(SessionAction::Resize { w, h, x, y, .. }) = action else {
            panic!("expected a resize transition");
        };
        assert_eq!(w, MIN_WINDOW_WIDTH);
        assert_eq!(h, 300);
        assert_eq!(x, Some(start.x + start.w - MIN_WINDOW_WIDTH));
        // The east edge did not move.
        assert_eq!(x.unwrap() + w, start.x + start.w);
        assert_eq!(y, Some(100));
    }

    #[test]
    fn north_west_corner_clamp_keeps_the_bottom_right_corner_fixed() {
        let mut controller = PointerController::default();
        let start = WindowRect {
            x: 100,
            y: 100,
            w: 300,
            h: 300,
        };
        let win = window(start);
        controller.press_handle(&win, ResizeEdge::NorthWest, at(100, 100));

        // Drag inwards by 250 on both axes: unclamped result is 50 by 50 at
        // (350, 350), so its bottom-right corner sits at (400, 400).
        let action = controller.pointer_moved(at(350, 350));
        let Some(SessionAction::Resize { w, h, x, y, .. }) = action else {
            panic!("expected a resize transition");
        };
        assert_eq!((w, h), (MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
        assert_eq!(x.unwrap() + w, 400);
        assert_eq!(y.unwrap() + h, 400);
    }

    #[test]
    fn corner_resizes_combine_both_axes_independently() {
        let mut controller = PointerController::default();
        let win = window(WindowRect {
            x: 0,
            y: 0,
            w: 400,
            h: 400,
        });
        controller.press_handle(&win, ResizeEdge::SouthEast, at(400, 400));

        let action = controller.pointer_moved(at(330, 470));
        assert_eq!(
            action,
            Some(SessionAction::Resize {
                window_id: WindowId(1),
                w: 330,
                h: 470,
                x: Some(0),
                y: Some(0),
            })
        );
    }

    #[test]
    fn release_tears_the_gesture_down_and_is_idempotent() {
        let mut controller = PointerController::default();
        let win = window(WindowRect::default());
        controller.press_titlebar(&win, at(90, 70), at(0, 0));
        assert!(controller.is_active());

        controller.release();
        assert!(!controller.is_active());
        assert_eq!(controller.pointer_moved(at(500, 500)), None);

        // A second release (for example pointercancel after pointerup) is fine.
        controller.release();
        assert_eq!(controller.gesture(), Gesture::Idle);
    }

    #[test]
    fn a_new_press_replaces_any_stale_gesture() {
        let mut controller = PointerController::default();
        let win = window(WindowRect::default());
        controller.press_titlebar(&win, at(90, 70), at(0, 0));
        controller.press_handle(&win, ResizeEdge::North, at(90, 60));
        assert!(matches!(controller.gesture(), Gesture::Resizing(_)));
    }
}
